//! # Shortest-Path Search
//!
//! Level-order BFS over an `AdjacencyGraph` with parent-pointer path
//! reconstruction. All edges weigh one, so the first time the goal is
//! dequeued its path is minimal.
//!
//! The search itself never logs. Anything that wants to watch it implements
//! `SearchObserver` and is passed in.

pub mod bfs;

use tracing::trace;
use crate::model::WordId;

pub use bfs::{bfs, bfs_observed};

// ============================================================================
// Observer seam
// ============================================================================

/// Callbacks fired while a search runs. Every method defaults to a no-op.
pub trait SearchObserver {
    fn on_start(&mut self, _start: WordId, _goal: WordId) {}

    /// `node` was taken off the front of the frontier.
    fn on_dequeue(&mut self, _node: WordId) {}

    /// `node` was seen for the first time, reached from `parent`.
    fn on_discover(&mut self, _node: WordId, _parent: WordId) {}

    /// The search is over. `path_len` is 0 when the goal was not reached.
    fn on_finish(&mut self, _path_len: usize) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Forwards events to `tracing` at TRACE level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_start(&mut self, start: WordId, goal: WordId) {
        trace!(%start, %goal, "bfs start");
    }

    fn on_dequeue(&mut self, node: WordId) {
        trace!(%node, "bfs dequeue");
    }

    fn on_discover(&mut self, node: WordId, parent: WordId) {
        trace!(%node, %parent, "bfs discover");
    }

    fn on_finish(&mut self, path_len: usize) {
        trace!(path_len, "bfs finish");
    }
}

/// Counts events; handy for checking how much of the graph a query touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub dequeued: usize,
    pub discovered: usize,
    pub path_len: usize,
}

impl SearchObserver for SearchStats {
    fn on_dequeue(&mut self, _node: WordId) {
        self.dequeued += 1;
    }

    fn on_discover(&mut self, _node: WordId, _parent: WordId) {
        self.discovered += 1;
    }

    fn on_finish(&mut self, path_len: usize) {
        self.path_len = path_len;
    }
}
