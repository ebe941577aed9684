//! # wordpath — Shortest Word Ladders over an Edit-Distance Graph
//!
//! Loads a word list and a precomputed binary adjacency file, then answers
//! "what is the shortest chain of single mutations from `start` to `end`?"
//! with a breadth-first search.
//!
//! ## Design Principles
//!
//! 1. **Explicit configuration**: resource locations live in `GraphConfig`,
//!    never in constants, so tests point at fixtures
//! 2. **Clean DTOs**: `WordId`, `WordPath`, `Dictionary`, `AdjacencyGraph`
//!    are plain data
//! 3. **Search owns nothing**: BFS is a pure function over an adjacency view;
//!    diagnostics go through an injected `SearchObserver`
//! 4. **Not found is not an error**: an unknown word or an unreachable goal
//!    yields an empty path, loading failures yield `Err`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wordpath::{GraphConfig, WordGraph, PathOutcome};
//!
//! # fn example() -> wordpath::Result<()> {
//! let config = GraphConfig::default()
//!     .with_words_path("data/words.txt")
//!     .with_adjacency_path("data/graph.bin");
//!
//! let graph = WordGraph::load(&config)?;
//! match graph.shortest_path("cat", "dog")? {
//!     PathOutcome::Found(path) => println!("{path}"),
//!     PathOutcome::UnknownWord(word) => println!("unknown word: {word}"),
//!     PathOutcome::Unreachable => println!("no path"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Resources
//!
//! | Resource | Module | Format |
//! |----------|--------|--------|
//! | Word list | `storage::dictionary` | whitespace-separated words, position = id |
//! | Adjacency | `storage::adjacency` | u32 LE node count, then per node u32 LE count + ids |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod index;
pub mod search;
pub mod builder;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{AdjacencyGraph, Dictionary, Neighbors, WordId, WordPath};

// ============================================================================
// Re-exports: Storage, Index, Search
// ============================================================================

pub use storage::GraphConfig;
pub use index::{DuplicatePolicy, WordIndex};
pub use search::{NoopObserver, SearchObserver, SearchStats, TracingObserver};

use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

// ============================================================================
// Top-level WordGraph handle
// ============================================================================

/// Outcome of a single query.
///
/// `UnknownWord` and `Unreachable` are both "no path" for the user, but are
/// kept apart so a caller can explain which one happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    Found(WordPath),
    /// The given endpoint is not in the dictionary.
    UnknownWord(String),
    /// Both words exist but no chain of mutations connects them.
    Unreachable,
}

impl PathOutcome {
    /// Collapse into the plain path form: empty means "no path".
    pub fn into_path(self) -> WordPath {
        match self {
            PathOutcome::Found(path) => path,
            PathOutcome::UnknownWord(_) | PathOutcome::Unreachable => WordPath::empty(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }
}

/// Dictionary, adjacency and word index loaded together for one query.
pub struct WordGraph {
    dictionary: Dictionary,
    adjacency: AdjacencyGraph,
    index: WordIndex,
}

impl WordGraph {
    /// Load both resources named by `config` and cross-check them.
    pub fn load(config: &GraphConfig) -> Result<Self> {
        let started = Instant::now();
        let dictionary = storage::load_dictionary(&config.words_path)?;
        let adjacency = storage::load_adjacency(&config.adjacency_path)?;
        let graph = Self::from_parts(dictionary, adjacency, config.duplicate_policy)?;
        info!(
            words = graph.dictionary.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "word graph loaded"
        );
        Ok(graph)
    }

    /// Assemble a graph from already-loaded parts.
    ///
    /// Fails with `MalformedData` when the two resources disagree on the
    /// node count or a neighbor id points past the dictionary.
    pub fn from_parts(
        dictionary: Dictionary,
        adjacency: AdjacencyGraph,
        policy: DuplicatePolicy,
    ) -> Result<Self> {
        if adjacency.node_count() != dictionary.len() {
            return Err(Error::MalformedData(format!(
                "adjacency declares {} nodes but the dictionary has {} words",
                adjacency.node_count(),
                dictionary.len()
            )));
        }
        adjacency.validate()?;
        let index = WordIndex::build(&dictionary, policy)?;
        Ok(Self { dictionary, adjacency, index })
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn adjacency(&self) -> &AdjacencyGraph {
        &self.adjacency
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Shortest path between two words.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<PathOutcome> {
        self.shortest_path_observed(start, end, &mut NoopObserver)
    }

    /// Shortest path, reporting search events to `observer`.
    pub fn shortest_path_observed(
        &self,
        start: &str,
        end: &str,
        observer: &mut dyn SearchObserver,
    ) -> Result<PathOutcome> {
        let Some(start_id) = self.index.get(start) else {
            debug!(word = start, "start word not in dictionary");
            return Ok(PathOutcome::UnknownWord(start.to_string()));
        };
        let Some(end_id) = self.index.get(end) else {
            debug!(word = end, "end word not in dictionary");
            return Ok(PathOutcome::UnknownWord(end.to_string()));
        };

        let ids = search::bfs_observed(&self.adjacency, start_id, end_id, observer)?;
        if ids.is_empty() {
            debug!(start, end, "goal not reachable");
            return Ok(PathOutcome::Unreachable);
        }
        Ok(PathOutcome::Found(self.translate(&ids)?))
    }

    /// Map identifiers back to words.
    pub fn translate(&self, ids: &[WordId]) -> Result<WordPath> {
        let words = ids
            .iter()
            .map(|&id| {
                self.dictionary.get(id).map(str::to_string).ok_or(Error::FaultyIndex {
                    id: id.0,
                    node_count: self.dictionary.len(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(WordPath::new(words))
    }
}

/// Single-shot query: load fresh resources, search, translate.
///
/// An empty vector means either word is unknown or no path exists.
pub fn find_path(config: &GraphConfig, start: &str, end: &str) -> Result<Vec<String>> {
    let graph = WordGraph::load(config)?;
    Ok(graph.shortest_path(start, end)?.into_path().into_words())
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Resource unavailable: {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data: {0}")]
    MalformedData(String),

    #[error("Faulty index: id {id} is outside [0, {node_count})")]
    FaultyIndex { id: u32, node_count: usize },

    #[error("Duplicate word '{word}' at positions {first} and {second}")]
    DuplicateWord { word: String, first: u32, second: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
