//! Dense word identifier.

use serde::{Deserialize, Serialize};

/// Zero-based position of a word in the dictionary.
///
/// The same numbering is used as the node index in the adjacency file, so a
/// `WordId` is only meaningful together with the dictionary it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordId(pub u32);

impl WordId {
    /// Sentinel used by the search for "no parent".
    pub const NONE: WordId = WordId(u32::MAX);

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl From<u32> for WordId {
    fn from(raw: u32) -> Self {
        WordId(raw)
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
