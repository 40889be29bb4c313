//! Stopword sets.
//!
//! A [`StopwordSet`] is loaded once and shared read-only by every summarizer
//! built from it. The set always contains the punctuation tokens in
//! [`PUNCTUATION_STOPWORDS`] in addition to the loaded words.

use std::collections::HashSet;

use camino::Utf8Path;

use crate::error::{StopwordError, StopwordResult};

/// English stopword list compiled into the crate.
const ENGLISH_STOPWORDS: &str = include_str!("../data/stopwords_en.txt");

/// Tokens that are always treated as stopwords.
pub const PUNCTUATION_STOPWORDS: &[&str] = &["-", " ", ",", "."];

/// Immutable set of tokens excluded from keyword and title scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from the bundled English list.
    pub fn english() -> Self {
        Self::parse(ENGLISH_STOPWORDS)
    }

    /// Build a set from an explicit word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: HashSet<String> = words.into_iter().map(Into::into).collect();
        set.extend(PUNCTUATION_STOPWORDS.iter().map(|w| (*w).to_string()));
        Self { words: set }
    }

    /// Parse a line-oriented list, one token per line.
    ///
    /// Line terminators are removed; empty lines are skipped. Tokens are kept
    /// verbatim (no case folding).
    pub fn parse(contents: &str) -> Self {
        Self::from_words(
            contents
                .lines()
                .map(|line| line.trim_end_matches('\r'))
                .filter(|line| !line.is_empty()),
        )
    }

    /// Load a stopword file from disk.
    #[tracing::instrument(fields(path = %path))]
    pub fn load(path: &Utf8Path) -> StopwordResult<Self> {
        let contents =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| StopwordError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let set = Self::parse(&contents);
        tracing::debug!(words = set.len(), "stopword list loaded");
        Ok(set)
    }

    /// Whether `word` is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of tokens in the set, punctuation included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty. Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn punctuation_always_present() {
        let set = StopwordSet::from_words(Vec::<String>::new());
        for token in PUNCTUATION_STOPWORDS {
            assert!(set.contains(token));
        }
        assert_eq!(set.len(), PUNCTUATION_STOPWORDS.len());
    }

    #[test]
    fn english_list_has_common_words() {
        let set = StopwordSet::english();
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(!set.contains("cats"));
    }

    #[test]
    fn parse_skips_blank_lines_and_carriage_returns() {
        let set = StopwordSet::parse("the\r\n\nof\n");
        assert!(set.contains("the"));
        assert!(set.contains("of"));
        assert!(!set.contains(""));
        assert_eq!(set.len(), 2 + PUNCTUATION_STOPWORDS.len());
    }

    #[test]
    fn parse_is_case_sensitive() {
        let set = StopwordSet::parse("The\n");
        assert!(set.contains("The"));
        assert!(!set.contains("the"));
    }

    #[test]
    fn load_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stopwords.txt");
        fs::write(&path, "alpha\nbeta\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let set = StopwordSet::load(&path).unwrap();
        assert!(set.contains("alpha"));
        assert!(set.contains("beta"));
    }

    #[test]
    fn load_missing_file_errors() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("missing.txt")).unwrap();

        let err = StopwordSet::load(&path).unwrap_err();
        assert!(matches!(err, StopwordError::Read { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
