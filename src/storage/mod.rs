//! # Resource Loading
//!
//! Reads the two input resources that make up a word graph:
//!
//! | Resource | Module | Produces |
//! |----------|--------|----------|
//! | Word list | `dictionary` | `Dictionary` |
//! | Adjacency file | `adjacency` | `AdjacencyGraph` |
//!
//! Every call opens its file, reads it fully and drops the handle before
//! returning, on the error paths too. Nothing is cached between calls.

pub mod dictionary;
pub mod adjacency;

use std::fs::File;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::index::DuplicatePolicy;
use crate::{Error, Result};

pub use dictionary::{load_dictionary, read_dictionary, save_words};
pub use adjacency::{load_adjacency, read_adjacency, save_adjacency, write_adjacency};

// ============================================================================
// Graph Configuration
// ============================================================================

/// Default word list location, relative to the working directory.
pub const DEFAULT_WORDS_PATH: &str = "data/words.txt";
/// Default adjacency file location, relative to the working directory.
pub const DEFAULT_ADJACENCY_PATH: &str = "data/graph.bin";

/// Where to find the word graph and how to index it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Whitespace-separated word list; position defines the identifier.
    pub words_path: PathBuf,
    /// Binary adjacency file built from the same word list.
    pub adjacency_path: PathBuf,
    /// What the word index does when a word appears twice.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            adjacency_path: PathBuf::from(DEFAULT_ADJACENCY_PATH),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl GraphConfig {
    /// Both resources inside one directory, named as the builder writes them.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            words_path: dir.join("words.txt"),
            adjacency_path: dir.join("graph.bin"),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = open(path)?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    pub fn with_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.words_path = path.into();
        self
    }

    pub fn with_adjacency_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.adjacency_path = path.into();
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

/// Open a resource, mapping failure to `ResourceUnavailable`.
pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Create an output file, mapping failure to `ResourceUnavailable`.
pub(crate) fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| Error::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
