//! Extractive summarization.
//!
//! [`Summarizer`] ties the pipeline together: split the body into sentences,
//! extract keywords, score every sentence against the title and keywords,
//! and keep the best ones. Documents with no more sentences than the summary
//! size are returned whole, in document order.
//!
//! # Example
//!
//! ```
//! use teaser_core::Summarizer;
//!
//! let summarizer = Summarizer::english();
//! let summary = summarizer.summarize("Cats", "Cats are great. Dogs are fine.");
//! assert_eq!(summary.len(), 2);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::fetch::ArticleFetcher;
use crate::keywords::{DEFAULT_KEYWORD_LIMIT, Keyword, KeywordExtractor};
use crate::scoring::{IDEAL_SENTENCE_LENGTH, ScoreRecord, SentenceFeatures, SentenceScorer};
use crate::stopwords::StopwordSet;
use crate::text;

/// Default number of sentences in a summary.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 5;

/// Tunable parameters of the summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerOptions {
    /// Sentences kept in a summary.
    pub summary_sentences: usize,
    /// Keywords extracted per document.
    pub keyword_limit: usize,
    /// Ideal sentence length in words.
    pub ideal_sentence_length: f64,
}

impl Default for SummarizerOptions {
    fn default() -> Self {
        Self {
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            ideal_sentence_length: IDEAL_SENTENCE_LENGTH,
        }
    }
}

/// A sentence selected for a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySentence {
    /// Sentence text, exactly as split from the document.
    pub text: String,
    /// Position in the document (1-based).
    pub position: usize,
    /// Score breakdown; absent when the document was returned whole.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<SentenceFeatures>,
}

/// Result of summarizing one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Title used for scoring.
    pub title: String,
    /// Sentences in the document.
    pub sentence_count: usize,
    /// Whether sentences were ranked (`false` when the document was short
    /// enough to return whole).
    pub summarized: bool,
    /// Document keywords in rank order.
    pub keywords: Vec<Keyword>,
    /// Selected sentences, best first when summarized.
    pub sentences: Vec<SummarySentence>,
}

impl SummaryReport {
    /// Sentence texts in report order.
    pub fn texts(&self) -> Vec<String> {
        self.sentences.iter().map(|s| s.text.clone()).collect()
    }
}

/// Extractive summarizer.
///
/// Cheap to clone; the stopword set is shared.
#[derive(Debug, Clone)]
pub struct Summarizer {
    stopwords: Arc<StopwordSet>,
    options: SummarizerOptions,
}

impl Summarizer {
    /// Create a summarizer with default options.
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self {
            stopwords,
            options: SummarizerOptions::default(),
        }
    }

    /// Create a summarizer using the bundled English stopwords.
    pub fn english() -> Self {
        Self::new(Arc::new(StopwordSet::english()))
    }

    /// Replace the options.
    pub const fn with_options(mut self, options: SummarizerOptions) -> Self {
        self.options = options;
        self
    }

    /// Options in effect.
    pub const fn options(&self) -> &SummarizerOptions {
        &self.options
    }

    /// Stopwords in effect.
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Summarize `text`, returning the selected sentences.
    pub fn summarize(&self, title: &str, text: &str) -> Vec<String> {
        self.summarize_report(title, text).texts()
    }

    /// Summarize `text`, returning keywords and score breakdowns as well.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), title_len = title.len()))]
    pub fn summarize_report(&self, title: &str, text: &str) -> SummaryReport {
        let sentences = text::split_sentences(text);
        let keywords = KeywordExtractor::new(&self.stopwords)
            .with_limit(self.options.keyword_limit)
            .extract(text);
        let title_words = text::split_words(title);
        let count = sentences.len();

        if count <= self.options.summary_sentences {
            tracing::debug!(sentences = count, "document short enough to return whole");
            return SummaryReport {
                title: title.to_string(),
                sentence_count: count,
                summarized: false,
                keywords: keywords.as_slice().to_vec(),
                sentences: sentences
                    .into_iter()
                    .enumerate()
                    .map(|(i, text)| SummarySentence {
                        text,
                        position: i + 1,
                        features: None,
                    })
                    .collect(),
            };
        }

        let scorer = SentenceScorer::new(&self.stopwords, &keywords, &title_words)
            .with_ideal_length(self.options.ideal_sentence_length);
        let mut record = ScoreRecord::new();
        for (i, sentence) in sentences.iter().enumerate() {
            let words = text::split_words(sentence);
            record.insert(sentence, i + 1, scorer.score(&words, i + 1, count));
        }

        let selected: Vec<SummarySentence> = record
            .most_common(self.options.summary_sentences)
            .into_iter()
            .map(|s| SummarySentence {
                text: s.text.clone(),
                position: s.position,
                features: Some(s.features),
            })
            .collect();

        tracing::debug!(
            sentences = count,
            distinct = record.len(),
            keywords = keywords.len(),
            selected = selected.len(),
            "document summarized"
        );

        SummaryReport {
            title: title.to_string(),
            sentence_count: count,
            summarized: true,
            keywords: keywords.as_slice().to_vec(),
            sentences: selected,
        }
    }

    /// Fetch the article at `url` and summarize it.
    ///
    /// Returns `None` when the fetch fails or the article lacks a title or
    /// body text; no summary is possible in that case.
    pub fn summarize_url<F>(&self, fetcher: &F, url: &str) -> Option<Vec<String>>
    where
        F: ArticleFetcher + ?Sized,
    {
        self.summarize_url_report(fetcher, url)
            .map(|report| report.texts())
    }

    /// Like [`Summarizer::summarize_url`], returning the full report.
    #[tracing::instrument(skip(self, fetcher))]
    pub fn summarize_url_report<F>(&self, fetcher: &F, url: &str) -> Option<SummaryReport>
    where
        F: ArticleFetcher + ?Sized,
    {
        let article = match fetcher.fetch(url) {
            Ok(article) => article,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch article");
                return None;
            }
        };

        if article.title.trim().is_empty() || article.body.trim().is_empty() {
            tracing::warn!("article has no title or no body text");
            return None;
        }

        Some(self.summarize_report(&article.title, &article.body))
    }
}
