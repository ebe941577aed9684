//! Breadth-first search with early exit on the goal.

use std::collections::VecDeque;

use super::{NoopObserver, SearchObserver};
use crate::model::{AdjacencyGraph, WordId};
use crate::{Error, Result};

/// Shortest path from `start` to `goal`, both ends included.
///
/// Returns `[start]` when `start == goal` and an empty vector when the goal
/// is unreachable. Ids outside the graph are `FaultyIndex`.
pub fn bfs(graph: &AdjacencyGraph, start: WordId, goal: WordId) -> Result<Vec<WordId>> {
    bfs_observed(graph, start, goal, &mut NoopObserver)
}

/// Same as [`bfs`], reporting progress to `observer`.
pub fn bfs_observed(
    graph: &AdjacencyGraph,
    start: WordId,
    goal: WordId,
    observer: &mut dyn SearchObserver,
) -> Result<Vec<WordId>> {
    let n = graph.node_count();
    for id in [start, goal] {
        if !graph.contains(id) {
            return Err(Error::FaultyIndex { id: id.0, node_count: n });
        }
    }
    observer.on_start(start, goal);

    let mut visited = vec![false; n];
    let mut parent = vec![WordId::NONE; n];
    let mut frontier = VecDeque::from([start]);
    visited[start.index()] = true;

    while let Some(current) = frontier.pop_front() {
        observer.on_dequeue(current);
        if current == goal {
            break;
        }

        for &next in graph.neighbors(current)? {
            let seen = visited
                .get_mut(next.index())
                .ok_or(Error::FaultyIndex { id: next.0, node_count: n })?;
            if !*seen {
                *seen = true;
                parent[next.index()] = current;
                observer.on_discover(next, current);
                frontier.push_back(next);
            }
        }
    }

    if goal != start && parent[goal.index()].is_none() {
        observer.on_finish(0);
        return Ok(Vec::new());
    }

    let mut path = vec![goal];
    let mut at = goal;
    while at != start {
        at = parent[at.index()];
        path.push(at);
    }
    path.reverse();

    observer.on_finish(path.len());
    Ok(path)
}
