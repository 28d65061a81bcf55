use crate::error::{ResourceError, Result};

const HAPPY_NAME: &str = "happy.txt";
const HAPPY: &str = include_str!("../assets/happy.txt");

/// An immutable, ordered list of phrase entries.
///
/// Each entry is one non-blank line of the source text with surrounding
/// whitespace removed. An entry may hold several words. A successfully built
/// corpus always has at least one entry.
///
/// The corpus is meant to be built once per process and then shared
/// read-only, typically behind an [`Arc`](std::sync::Arc).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCorpus {
    entries: Box<[String]>,
}

impl WordCorpus {
    /// Loads the wordlist embedded in the binary at compile time.
    ///
    /// # Errors
    /// Returns [`ResourceError::Empty`] if the embedded list has no usable
    /// lines.
    ///
    /// # Example
    /// ```
    /// let corpus = godsays::WordCorpus::load().unwrap();
    /// assert!(!corpus.is_empty());
    /// ```
    pub fn load() -> Result<Self> {
        Self::parse_named(HAPPY_NAME, HAPPY)
    }

    /// Builds a corpus from arbitrary newline-delimited text.
    ///
    /// Lines are trimmed and blank lines are dropped; order is preserved.
    ///
    /// # Errors
    /// Returns [`ResourceError::Empty`] if no line survives trimming.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_named("<inline>", text)
    }

    fn parse_named(name: &'static str, text: &str) -> Result<Self> {
        let entries: Box<[String]> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();

        if entries.is_empty() {
            return Err(ResourceError::Empty { name }.into());
        }
        Ok(Self { entries })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
