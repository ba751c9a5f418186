//! Analysis configuration resources.
//!
//! The word-frequency queries need a stop-word list supplied by the caller.
//! Rather than reading a file on every call, the list is loaded once into a
//! [`StopWords`] value and passed explicitly to whichever function needs it;
//! there is no ambient or process-wide state.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::StopWords;
//!
//! let stop = StopWords::from_text("the a an is are")?;
//! assert!(stop.contains("the"));
//! assert!(stop.contains("The")); // matching is lowercase
//! assert!(!stop.contains("hello"));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ChatlensError, Result};

/// A loaded stop-word set for word-frequency analysis.
///
/// Words are stored and matched lowercase. An empty list is a configuration
/// error: analysis against no stop words at all would silently inflate every
/// frequency table with filler words, so loading surfaces
/// [`ChatlensError::EmptyResource`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Loads stop words from whitespace-separated text.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::EmptyResource`] if the text contains no
    /// words.
    pub fn from_text(text: &str) -> Result<Self> {
        let words: HashSet<String> = text
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();

        if words.is_empty() {
            return Err(ChatlensError::empty_resource("stop-word list"));
        }

        Ok(Self { words })
    }

    /// Loads stop words from a file, one or more per line.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read and
    /// [`ChatlensError::EmptyResource`] if it contains no words.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// Builds a stop-word set from an iterator of words.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::EmptyResource`] if the iterator is empty.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();

        if words.is_empty() {
            return Err(ChatlensError::empty_resource("stop-word list"));
        }

        Ok(Self { words })
    }

    /// Returns `true` if the word is a stop word (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stop words loaded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no stop words are loaded.
    ///
    /// Only reachable through `Default`; the loading constructors reject
    /// empty input.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let stop = StopWords::from_text("the a an\nis are").unwrap();
        assert_eq!(stop.len(), 5);
        assert!(stop.contains("the"));
        assert!(stop.contains("are"));
        assert!(!stop.contains("hello"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let stop = StopWords::from_text("The AND").unwrap();
        assert!(stop.contains("the"));
        assert!(stop.contains("THE"));
        assert!(stop.contains("and"));
    }

    #[test]
    fn test_empty_text_is_error() {
        let err = StopWords::from_text("").unwrap_err();
        assert!(err.is_empty_resource());

        let err = StopWords::from_text("   \n\t  ").unwrap_err();
        assert!(err.is_empty_resource());
    }

    #[test]
    fn test_from_words() {
        let stop = StopWords::from_words(["the", "a"]).unwrap();
        assert_eq!(stop.len(), 2);

        let err = StopWords::from_words(Vec::<&str>::new()).unwrap_err();
        assert!(err.is_empty_resource());
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "the\na\nan").unwrap();

        let stop = StopWords::from_file(file.path()).unwrap();
        assert_eq!(stop.len(), 3);

        let missing = StopWords::from_file("no/such/stopwords.txt".as_ref());
        assert!(missing.unwrap_err().is_io());
    }
}
