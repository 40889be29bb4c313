//! Keyword extraction.
//!
//! Keywords are the most frequent non-stopword tokens of a document. Each
//! keyword's weight is `(count / total_words) * 1.5 + 1`, where the total
//! includes stopwords, so every weight is at least 1.0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::stopwords::StopwordSet;
use crate::text;

/// Default number of keywords kept per document.
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

/// A keyword with its raw count and relevance weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Lowercase token.
    pub word: String,
    /// Occurrences in the document.
    pub count: usize,
    /// Relevance weight (≥ 1.0).
    pub weight: f64,
}

/// Keywords of a document, ordered by rank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordTable {
    entries: Vec<Keyword>,
    index: HashMap<String, usize>,
}

impl KeywordTable {
    fn from_ranked(entries: Vec<Keyword>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, k)| (k.word.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Weight of `word`, if it is a keyword.
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.index.get(word).map(|&i| self.entries[i].weight)
    }

    /// Whether `word` is a keyword.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Keywords in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.entries.iter()
    }

    /// Keywords in rank order, as a slice.
    pub fn as_slice(&self) -> &[Keyword] {
        &self.entries
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keywords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes a [`KeywordTable`] from document text.
#[derive(Debug, Clone, Copy)]
pub struct KeywordExtractor<'a> {
    stopwords: &'a StopwordSet,
    limit: usize,
}

impl<'a> KeywordExtractor<'a> {
    /// Create an extractor keeping [`DEFAULT_KEYWORD_LIMIT`] keywords.
    pub const fn new(stopwords: &'a StopwordSet) -> Self {
        Self {
            stopwords,
            limit: DEFAULT_KEYWORD_LIMIT,
        }
    }

    /// Set the maximum number of keywords kept.
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Extract keywords from text.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), limit = self.limit))]
    pub fn extract(&self, text: &str) -> KeywordTable {
        self.rank(&text::split_words(text))
    }

    /// Extract keywords from raw bytes.
    ///
    /// Input that is not UTF-8 yields an empty table instead of an error, so
    /// a summary can still be produced from position, length and title
    /// features alone.
    #[tracing::instrument(skip_all, fields(bytes = bytes.len(), limit = self.limit))]
    pub fn extract_bytes(&self, bytes: &[u8]) -> KeywordTable {
        match text::try_split_words(bytes) {
            Ok(words) => self.rank(&words),
            Err(err) => {
                tracing::warn!(error = %err, "tokenization failed; no keywords extracted");
                KeywordTable::default()
            }
        }
    }

    fn rank(&self, words: &[String]) -> KeywordTable {
        let num_words = words.len();

        // Counts in first-encountered order so the stable sort keeps ties in that order.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        for word in words.iter().map(String::as_str) {
            if self.stopwords.contains(word) {
                continue;
            }
            match slots.get(word) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(word, counts.len());
                    counts.push((word, 1));
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(self.limit);

        let entries: Vec<Keyword> = counts
            .into_iter()
            .map(|(word, count)| Keyword {
                word: word.to_string(),
                count,
                weight: (count as f64 / num_words as f64).mul_add(1.5, 1.0),
            })
            .collect();

        tracing::debug!(
            num_words,
            keywords = entries.len(),
            "keywords extracted"
        );
        KeywordTable::from_ranked(entries)
    }
}
