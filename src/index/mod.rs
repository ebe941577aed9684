//! Index Resolver — word text to dense identifier.

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{Dictionary, WordId};
use crate::{Error, Result};

/// What to do when a word appears more than once in the dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Later occurrence wins. Matches word lists built without dedup.
    #[default]
    KeepLast,
    /// Earliest occurrence wins.
    KeepFirst,
    /// Refuse to build the index.
    Reject,
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "keep_last" | "last" => Ok(Self::KeepLast),
            "keep_first" | "first" => Ok(Self::KeepFirst),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown duplicate policy '{other}' (expected keep-last, keep-first or reject)"
            )),
        }
    }
}

/// Lookup table from word to `WordId`, built in one pass.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    ids: HashMap<String, WordId>,
    duplicates: usize,
}

impl WordIndex {
    pub fn build(dictionary: &Dictionary, policy: DuplicatePolicy) -> Result<Self> {
        let mut ids: HashMap<String, WordId> = HashMap::with_capacity(dictionary.len());
        let mut duplicates = 0;

        for (id, word) in dictionary.iter() {
            match ids.entry(word.to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
                Entry::Occupied(mut slot) => {
                    duplicates += 1;
                    match policy {
                        DuplicatePolicy::KeepLast => {
                            slot.insert(id);
                        }
                        DuplicatePolicy::KeepFirst => {}
                        DuplicatePolicy::Reject => {
                            return Err(Error::DuplicateWord {
                                word: word.to_string(),
                                first: slot.get().0,
                                second: id.0,
                            });
                        }
                    }
                }
            }
        }

        if duplicates > 0 {
            warn!(duplicates, ?policy, "dictionary contains duplicate words");
        }
        Ok(Self { ids, duplicates })
    }

    pub fn get(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// How many dictionary entries repeated an earlier word.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}
