//! Sentence scoring.
//!
//! Each sentence gets four features, blended into one score:
//!
//! - **title**: share of the title's content words that appear in the sentence
//! - **length**: closeness to the ideal sentence length
//! - **position**: empirical prior on where important sentences sit
//! - **frequency**: keyword density ([`sbs`]) and keyword proximity ([`dbs`])
//!
//! Formula: `(title * 1.5 + frequency * 2.0 + length + position) / 4`

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::keywords::KeywordTable;
use crate::stopwords::StopwordSet;

/// Ideal sentence length in words.
pub const IDEAL_SENTENCE_LENGTH: f64 = 20.0;

/// Position score buckets: upper bound of the normalized position and its score.
const POSITION_BUCKETS: [(f64, f64); 10] = [
    (0.1, 0.17),
    (0.2, 0.23),
    (0.3, 0.14),
    (0.4, 0.08),
    (0.5, 0.05),
    (0.6, 0.04),
    (0.7, 0.06),
    (0.8, 0.04),
    (0.9, 0.04),
    (1.0, 0.15),
];

/// Share of the title's non-stopword tokens matched by the sentence.
///
/// Counts sentence words that are not stopwords and occur among the title's
/// non-stopword tokens, divided by the number of those title tokens
/// (duplicates included). Returns 0 when the title has no content words.
pub fn title_score(title: &[String], sentence: &[String], stopwords: &StopwordSet) -> f64 {
    let title: Vec<&str> = title
        .iter()
        .map(String::as_str)
        .filter(|w| !stopwords.contains(w))
        .collect();
    if title.is_empty() {
        return 0.0;
    }

    let matches = sentence
        .iter()
        .filter(|w| !stopwords.contains(w) && title.contains(&w.as_str()))
        .count();

    matches as f64 / title.len() as f64
}

/// `1 - |ideal - words| / ideal`; 1.0 at the ideal length, negative far from it.
pub fn length_score(sentence: &[String], ideal: f64) -> f64 {
    1.0 - (ideal - sentence.len() as f64).abs() / ideal
}

/// Score for the `i`-th (1-based) of `size` sentences.
///
/// Returns 0 when `i` is 0, past the end, or the document is empty.
pub fn sentence_position(i: usize, size: usize) -> f64 {
    if size == 0 {
        return 0.0;
    }
    let normalized = i as f64 / size as f64;
    if normalized <= 0.0 {
        return 0.0;
    }
    POSITION_BUCKETS
        .iter()
        .find(|(upper, _)| normalized <= *upper)
        .map_or(0.0, |&(_, score)| score)
}

/// Summation-based score: mean keyword weight per word, scaled by 1/10.
pub fn sbs(words: &[String], keywords: &KeywordTable) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let total: f64 = words.iter().filter_map(|w| keywords.weight(w)).sum();
    (total / words.len() as f64) / 10.0
}

/// A keyword occurrence inside a sentence.
#[derive(Debug, Clone, Copy)]
struct Hit {
    index: usize,
    weight: f64,
}

/// Distance-based score: rewards consecutive keyword hits that sit close together.
///
/// Walks the sentence keeping the two most recent hits. On every hit the
/// previous `first` slides into `second` and the new hit becomes `first`;
/// once both are occupied the pair contributes
/// `first.weight * second.weight / distance²`. The sum is normalized by
/// `k * (k + 1)`, where `k` is one more than the number of distinct keywords
/// in the sentence.
pub fn dbs(words: &[String], keywords: &KeywordTable) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut first: Option<Hit> = None;

    for (index, word) in words.iter().enumerate() {
        let Some(weight) = keywords.weight(word) else {
            continue;
        };
        let hit = Hit { index, weight };
        if let Some(prev) = first.replace(hit) {
            let distance = (hit.index - prev.index) as f64;
            sum += (hit.weight * prev.weight) / (distance * distance);
        }
    }

    let distinct: HashSet<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| keywords.contains(w))
        .collect();
    let k = distinct.len() as f64 + 1.0;
    sum / (k * (k + 1.0))
}

/// Per-feature breakdown of one sentence's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentenceFeatures {
    /// Title overlap.
    pub title: f64,
    /// Length closeness to the ideal.
    pub length: f64,
    /// Position prior.
    pub position: f64,
    /// Summation-based keyword score.
    pub sbs: f64,
    /// Distance-based keyword score.
    pub dbs: f64,
    /// `(sbs + dbs) / 2 * 10`.
    pub frequency: f64,
    /// Weighted blend of the features above.
    pub total: f64,
}

/// Scores sentences of one document against its title and keywords.
#[derive(Debug, Clone)]
pub struct SentenceScorer<'a> {
    stopwords: &'a StopwordSet,
    keywords: &'a KeywordTable,
    title: &'a [String],
    ideal_length: f64,
}

impl<'a> SentenceScorer<'a> {
    /// Create a scorer using [`IDEAL_SENTENCE_LENGTH`].
    pub const fn new(
        stopwords: &'a StopwordSet,
        keywords: &'a KeywordTable,
        title: &'a [String],
    ) -> Self {
        Self {
            stopwords,
            keywords,
            title,
            ideal_length: IDEAL_SENTENCE_LENGTH,
        }
    }

    /// Override the ideal sentence length.
    pub const fn with_ideal_length(mut self, ideal_length: f64) -> Self {
        self.ideal_length = ideal_length;
        self
    }

    /// Score the tokenized sentence at 1-based `position` of `count` sentences.
    pub fn score(&self, words: &[String], position: usize, count: usize) -> SentenceFeatures {
        let title = title_score(self.title, words, self.stopwords);
        let length = length_score(words, self.ideal_length);
        let position = sentence_position(position, count);
        let sbs = sbs(words, self.keywords);
        let dbs = dbs(words, self.keywords);
        let frequency = (sbs + dbs) / 2.0 * 10.0;
        let total = (title * 1.5 + frequency * 2.0 + length * 1.0 + position * 1.0) / 4.0;

        SentenceFeatures {
            title,
            length,
            position,
            sbs,
            dbs,
            frequency,
            total,
        }
    }
}

/// A sentence with its score and 1-based position of first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Sentence text.
    pub text: String,
    /// Position of the first occurrence in the document (1-based).
    pub position: usize,
    /// Score breakdown.
    pub features: SentenceFeatures,
}

/// Scores keyed by sentence text.
///
/// Sentences with identical text share one entry: a later occurrence
/// overwrites the score but keeps the first occurrence's slot.
#[derive(Debug, Clone, Default)]
pub struct ScoreRecord {
    entries: Vec<ScoredSentence>,
    index: HashMap<String, usize>,
}

impl ScoreRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the score of `text`, found at 1-based `position`.
    pub fn insert(&mut self, text: &str, position: usize, features: SentenceFeatures) {
        if let Some(&slot) = self.index.get(text) {
            self.entries[slot].features = features;
            return;
        }
        self.index.insert(text.to_string(), self.entries.len());
        self.entries.push(ScoredSentence {
            text: text.to_string(),
            position,
            features,
        });
    }

    /// The `n` highest-scoring sentences, best first; ties keep insertion order.
    pub fn most_common(&self, n: usize) -> Vec<&ScoredSentence> {
        let mut ranked: Vec<&ScoredSentence> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.features.total.total_cmp(&a.features.total));
        ranked.truncate(n);
        ranked
    }

    /// Score of `text`, if recorded.
    pub fn get(&self, text: &str) -> Option<f64> {
        self.index
            .get(text)
            .map(|&slot| self.entries[slot].features.total)
    }

    /// Number of distinct sentences recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
