//! WordPath — the words visited from start to goal.

use serde::{Deserialize, Serialize};

/// A ladder of words, start first, goal last. Consecutive words are
/// neighbors in the graph.
///
/// An empty `WordPath` means "no path"; it never signals an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordPath {
    words: Vec<String>,
}

impl WordPath {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of edges (mutations) on the path.
    pub fn hops(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn start(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl std::fmt::Display for WordPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.words.join(" -> "))
    }
}
