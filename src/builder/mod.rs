//! # Graph Builder
//!
//! Offline construction of the two resources from a raw word list:
//! normalize the words, link every pair one edit apart, and write
//! `words.txt` + `graph.bin` in the layout the loaders read.
//!
//! An edit is one deletion, one insertion of `a..=z`, or one substitution
//! with `a..=z`.

use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::index::{DuplicatePolicy, WordIndex};
use crate::model::{AdjacencyGraph, Dictionary, Neighbors, WordId};
use crate::storage::{self, GraphConfig};
use crate::Result;

const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Trim, lowercase, drop empties and duplicates, sort.
pub fn normalize_dictionary<'a>(words: impl IntoIterator<Item = &'a str>) -> Dictionary {
    let mut words: Vec<String> = words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();
    words.sort();
    words.dedup();
    Dictionary::new(words)
}

/// Ids of every indexed word one edit away from `word`, sorted, no repeats.
pub fn edit_neighbors(word: &str, index: &WordIndex) -> Neighbors {
    let chars: Vec<char> = word.chars().collect();
    let mut found: Vec<WordId> = Vec::new();
    let mut probe = |candidate: String| {
        if let Some(id) = index.get(&candidate) {
            found.push(id);
        }
    };

    for i in 0..chars.len() {
        probe(splice(&chars, i, i + 1, None));
    }
    for i in 0..chars.len() {
        for c in ALPHABET.filter(|&c| c != chars[i]) {
            probe(splice(&chars, i, i + 1, Some(c)));
        }
    }
    for i in 0..=chars.len() {
        for c in ALPHABET {
            probe(splice(&chars, i, i, Some(c)));
        }
    }

    found.sort_unstable();
    found.dedup();
    found.into_iter().collect()
}

/// `chars[..from] + insert + chars[to..]`
fn splice(chars: &[char], from: usize, to: usize, insert: Option<char>) -> String {
    chars[..from]
        .iter()
        .copied()
        .chain(insert)
        .chain(chars[to..].iter().copied())
        .collect()
}

/// Link every dictionary word to its one-edit neighbors.
pub fn build_graph(dictionary: &Dictionary) -> Result<AdjacencyGraph> {
    let started = Instant::now();
    let index = WordIndex::build(dictionary, DuplicatePolicy::KeepFirst)?;
    let lists = dictionary
        .iter()
        .map(|(_, word)| edit_neighbors(word, &index))
        .collect();
    let graph = AdjacencyGraph::new(lists);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "edit-distance graph built"
    );
    Ok(graph)
}

/// Read a raw word list, build the graph and write both resources into
/// `out_dir`. Returns a config pointing at what was written.
pub fn build_resources(raw_words: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> Result<GraphConfig> {
    let raw = storage::load_dictionary(raw_words)?;
    let dictionary = normalize_dictionary(raw.words().iter().map(String::as_str));
    let graph = build_graph(&dictionary)?;

    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir)?;
    let config = GraphConfig::in_dir(out_dir);
    storage::save_words(&config.words_path, &dictionary)?;
    storage::save_adjacency(&config.adjacency_path, &graph)?;
    info!(dir = %out_dir.display(), words = dictionary.len(), "resources written");
    Ok(config)
}
