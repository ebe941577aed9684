//! AdjacencyGraph — per-node neighbor lists indexed by `WordId`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use super::WordId;
use crate::{Error, Result};

/// Neighbor list of one node. Most words have only a handful of
/// one-mutation neighbors, so short lists stay inline.
pub type Neighbors = SmallVec<[WordId; 8]>;

/// Unweighted graph over dense identifiers `[0, N)`.
///
/// Symmetry is expected from the builder but never enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    lists: Vec<Neighbors>,
}

impl AdjacencyGraph {
    pub fn new(lists: Vec<Neighbors>) -> Self {
        Self { lists }
    }

    /// Convenience constructor from raw `u32` lists.
    pub fn from_lists(lists: Vec<Vec<u32>>) -> Self {
        Self {
            lists: lists
                .into_iter()
                .map(|l| l.into_iter().map(WordId).collect())
                .collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(|l| l.len()).sum()
    }

    pub fn contains(&self, id: WordId) -> bool {
        id.index() < self.lists.len()
    }

    /// Neighbors of `id`, or `FaultyIndex` when `id` is outside the graph.
    pub fn neighbors(&self, id: WordId) -> Result<&[WordId]> {
        self.lists
            .get(id.index())
            .map(|l| l.as_slice())
            .ok_or(Error::FaultyIndex { id: id.0, node_count: self.lists.len() })
    }

    /// Iterate `(id, neighbors)` in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &[WordId])> {
        self.lists
            .iter()
            .enumerate()
            .map(|(i, l)| (WordId(i as u32), l.as_slice()))
    }

    /// Check every neighbor id lies in `[0, N)`.
    pub fn validate(&self) -> Result<()> {
        let n = self.lists.len();
        for (node, neighbors) in self.iter() {
            if let Some(bad) = neighbors.iter().find(|id| id.index() >= n) {
                return Err(Error::MalformedData(format!(
                    "node {node} lists neighbor {bad} but the graph has {n} nodes"
                )));
            }
        }
        Ok(())
    }
}
