//! Text processing utilities.
//!
//! Provides sentence splitting and word tokenization for the keyword
//! extractor and the sentence scorer.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::TokenizeResult;

/// Every character that is neither alphanumeric nor whitespace.
static NON_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}\s]").expect("valid regex"));

/// Split text into sentences using punctuation and capitalization.
///
/// A boundary is `.`, `!` or `?` (optionally followed by a closing `"`) that
/// is not preceded by an uppercase Latin or Cyrillic letter and is followed
/// by whitespace, an optional `"`, and an uppercase letter. The punctuation
/// stays with the sentence it ends. Sentences ending at a boundary have their
/// leading whitespace removed; the trailing fragment is kept as-is, so the
/// result always has at least one element.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if is_sentence_terminator(chars[i])
            && !(i > 0 && is_capital(chars[i - 1]))
            && let Some(end) = boundary_end(&chars, i)
        {
            let sentence: String = chars[start..end].iter().collect();
            sentences.push(sentence.trim_start().to_string());
            start = end;
            i = end;
            continue;
        }
        i += 1;
    }

    sentences.push(chars[start..].iter().collect());
    tracing::trace!(sentences = sentences.len(), "split sentences");
    sentences
}

/// Split a string into lowercase word tokens.
///
/// Removes every character that is not alphanumeric or whitespace, splits on
/// whitespace, trims `.` and lowercases each token.
pub fn split_words(text: &str) -> Vec<String> {
    NON_WORD_PATTERN
        .replace_all(text, "")
        .split_whitespace()
        .map(|w| w.trim_matches('.').to_lowercase())
        .collect()
}

/// Tokenize raw bytes, failing when they are not UTF-8 text.
pub fn try_split_words(bytes: &[u8]) -> TokenizeResult<Vec<String>> {
    let text = std::str::from_utf8(bytes)?;
    Ok(split_words(text))
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Uppercase Latin or Cyrillic letter (`A-Z`, `А-Я`, `Ё`).
const fn is_capital(ch: char) -> bool {
    matches!(ch, 'A'..='Z' | 'А'..='Я' | 'Ё')
}

/// End (exclusive) of the boundary token starting at `pos`, if `pos` ends a sentence.
fn boundary_end(chars: &[char], pos: usize) -> Option<usize> {
    let after = pos + 1;
    if chars.get(after) == Some(&'"') && followed_by_capital(chars, after + 1) {
        return Some(after + 1);
    }
    followed_by_capital(chars, after).then_some(after)
}

/// Whitespace, then an optional `"`, then a capital letter.
fn followed_by_capital(chars: &[char], from: usize) -> bool {
    let mut j = from;
    while j < chars.len() && chars[j].is_whitespace() {
        j += 1;
    }
    if j == from {
        return false;
    }
    if chars.get(j) == Some(&'"') {
        j += 1;
    }
    chars.get(j).is_some_and(|&c| is_capital(c))
}
