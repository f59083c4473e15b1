// Word list loading and case-insensitive membership.

use std::fs;
use std::path::Path;

use hashbrown::HashSet;

use crate::SpeltError;

/// A set of known-good words, stored lower-cased.
///
/// Built once from a word list file (one word per line, blank lines
/// ignored) and read-only afterwards. Lookups lower-case the query, so
/// "Hello" matches a dictionary containing "hello".
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a word list from a file.
    ///
    /// Entries are trimmed and lower-cased; blank lines and duplicates
    /// collapse silently. Returns an error when the file cannot be
    /// read, so callers can distinguish a missing file from an empty
    /// one and decide their own degradation policy.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpeltError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SpeltError::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_words(contents.lines()))
    }

    /// Build a dictionary from an iterator of words.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let words = words
            .into_iter()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stored (lower-cased) words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lookups_ignore_case() {
        let dict = Dictionary::from_words(["Hello", "WORLD"]);
        assert!(dict.contains("hello"));
        assert!(dict.contains("HeLLo"));
        assert!(dict.contains("world"));
        assert!(!dict.contains("helo"));
    }

    #[test]
    fn blank_lines_and_duplicates_collapse() {
        let dict = Dictionary::from_words(["dog", "", "  ", "cat", "DOG", "dog "]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("dog"));
        assert!(dict.contains("cat"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dog").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Cat  ").unwrap();
        file.flush().unwrap();

        let dict = Dictionary::load(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("cat"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Dictionary::load("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, SpeltError::Dictionary { .. }));
    }
}
