//! Core library for teaser.
//!
//! Extractive summarization: split a document into sentences, score each
//! one on title overlap, length, position and keyword distribution, and keep
//! the best few. The `teaser` CLI and any downstream consumers build on this
//! crate.
//!
//! # Modules
//!
//! - [`summarize`] - The summarizer and its report types
//! - [`text`] - Sentence splitting and word tokenization
//! - [`keywords`] - Frequency-based keyword extraction
//! - [`scoring`] - Per-sentence features and score records
//! - [`stopwords`] - Stopword sets
//! - [`fetch`] - Article fetching over HTTP
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use teaser_core::Summarizer;
//!
//! let summarizer = Summarizer::english();
//! let summary = summarizer.summarize(
//!     "Cats",
//!     "Cats are great. Dogs are great too. Cats sleep all day.",
//! );
//! assert_eq!(summary.len(), 3);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod fetch;
pub mod keywords;
pub mod scoring;
pub mod stopwords;
pub mod summarize;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    ConfigError, ConfigResult, FetchError, FetchResult, StopwordError, StopwordResult,
    TokenizeError, TokenizeResult,
};
pub use fetch::{Article, ArticleFetcher};
#[cfg(feature = "fetch")]
pub use fetch::{HttpFetcher, extract_article};
pub use keywords::{Keyword, KeywordExtractor, KeywordTable};
pub use stopwords::StopwordSet;
pub use summarize::{SummarizerOptions, Summarizer, SummaryReport, SummarySentence};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
