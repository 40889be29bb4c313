//! Error types for teaser-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when loading a stopword list.
#[derive(Error, Debug)]
pub enum StopwordError {
    /// The stopword file could not be read.
    #[error("failed to read stopword list {path}: {source}")]
    Read {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`StopwordError`].
pub type StopwordResult<T> = Result<T, StopwordError>;

/// Errors that can occur when tokenizing raw input.
#[derive(Error, Debug)]
pub enum TokenizeError {
    /// The input bytes are not valid UTF-8 text.
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Result type alias using [`TokenizeError`].
pub type TokenizeResult<T> = Result<T, TokenizeError>;

/// Errors that can occur while fetching and extracting an article.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request failed (connection, TLS, body read, timeout).
    #[cfg(feature = "fetch")]
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("server returned HTTP {status} for {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// No title could be located in the page.
    #[error("page has no title")]
    MissingTitle,

    /// No article text could be located in the page.
    #[error("page has no article text")]
    MissingBody,
}

/// Result type alias using [`FetchError`].
pub type FetchResult<T> = Result<T, FetchError>;
