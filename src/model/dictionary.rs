//! Dictionary — the ordered word list.

use serde::{Deserialize, Serialize};
use super::WordId;

/// Words in identifier order: `words[i]` is the word with `WordId(i)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn from_words(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { words: words.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Positional lookup.
    pub fn get(&self, id: WordId) -> Option<&str> {
        self.words.get(id.index()).map(String::as_str)
    }

    /// `(id, word)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId(i as u32), w.as_str()))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}
