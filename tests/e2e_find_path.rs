//! End-to-end tests for word ladder queries.
//!
//! Each test writes a word list and an adjacency file to a temp directory,
//! then exercises: load -> resolve -> search -> translate.

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wordpath::storage::{save_adjacency, save_words};
use wordpath::{
    find_path, AdjacencyGraph, Dictionary, DuplicatePolicy, Error, GraphConfig, PathOutcome,
    WordGraph,
};

// ============================================================================
// Helper: write a graph fixture to disk.
// ============================================================================

fn write_fixture(words: &[&str], lists: Vec<Vec<u32>>) -> (TempDir, GraphConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = GraphConfig::in_dir(dir.path());
    save_words(&config.words_path, &Dictionary::from_words(words.iter().copied())).unwrap();
    save_adjacency(&config.adjacency_path, &AdjacencyGraph::from_lists(lists)).unwrap();
    (dir, config)
}

/// cat - cot - cog - dog
fn ladder() -> (TempDir, GraphConfig) {
    write_fixture(
        &["cat", "cot", "cog", "dog"],
        vec![vec![1], vec![0, 2], vec![1, 3], vec![2]],
    )
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ============================================================================
// 1. The reference scenario
// ============================================================================

#[test]
fn test_cat_to_dog() {
    let (_dir, config) = ladder();
    let path = find_path(&config, "cat", "dog").unwrap();
    assert_eq!(path, strings(&["cat", "cot", "cog", "dog"]));
}

#[test]
fn test_same_word() {
    let (_dir, config) = ladder();
    assert_eq!(find_path(&config, "cat", "cat").unwrap(), strings(&["cat"]));
}

#[test]
fn test_unknown_word_is_empty_not_error() {
    let (_dir, config) = ladder();
    assert!(find_path(&config, "cat", "fox").unwrap().is_empty());
    assert!(find_path(&config, "fox", "cat").unwrap().is_empty());
}

#[test]
fn test_disconnected_goal() {
    let (_dir, config) = write_fixture(
        &["cat", "cot", "cog", "dog"],
        vec![vec![1], vec![0, 2], vec![1], vec![]],
    );
    assert!(find_path(&config, "cat", "dog").unwrap().is_empty());
}

#[test]
fn test_reverse_direction() {
    let (_dir, config) = ladder();
    let path = find_path(&config, "dog", "cot").unwrap();
    assert_eq!(path, strings(&["dog", "cog", "cot"]));
}

// ============================================================================
// 2. Outcome detail through WordGraph
// ============================================================================

#[test]
fn test_outcome_distinguishes_unknown_from_unreachable() {
    let (_dir, config) = write_fixture(&["cat", "cot", "dog"], vec![vec![1], vec![0], vec![]]);
    let graph = WordGraph::load(&config).unwrap();

    assert_eq!(
        graph.shortest_path("cat", "fox").unwrap(),
        PathOutcome::UnknownWord("fox".into())
    );
    assert_eq!(graph.shortest_path("cat", "dog").unwrap(), PathOutcome::Unreachable);
    assert!(graph.shortest_path("cot", "cat").unwrap().is_found());
}

#[test]
fn test_empty_dictionary_resolves_nothing() {
    let (_dir, config) = write_fixture(&[], vec![]);
    assert!(find_path(&config, "cat", "cat").unwrap().is_empty());
}

// ============================================================================
// 3. Duplicate words
// ============================================================================

/// "cat" appears at 0 and 2. Only the first copy is linked to "dog".
fn duplicate_fixture() -> (TempDir, GraphConfig) {
    write_fixture(&["cat", "dog", "cat"], vec![vec![1], vec![0], vec![]])
}

#[test]
fn test_duplicates_keep_last_by_default() {
    let (_dir, config) = duplicate_fixture();
    assert!(find_path(&config, "cat", "dog").unwrap().is_empty());
}

#[test]
fn test_duplicates_keep_first() {
    let (_dir, config) = duplicate_fixture();
    let config = config.with_duplicate_policy(DuplicatePolicy::KeepFirst);
    assert_eq!(find_path(&config, "cat", "dog").unwrap(), strings(&["cat", "dog"]));
}

#[test]
fn test_duplicates_reject() {
    let (_dir, config) = duplicate_fixture();
    let config = config.with_duplicate_policy(DuplicatePolicy::Reject);
    assert!(matches!(
        find_path(&config, "cat", "dog"),
        Err(Error::DuplicateWord { first: 0, second: 2, .. })
    ));
}

// ============================================================================
// 4. Loading failures are errors, never empty paths
// ============================================================================

#[test]
fn test_missing_word_list() {
    let (_dir, config) = ladder();
    let config = config.with_words_path("/nonexistent/words.txt");
    assert!(matches!(
        find_path(&config, "cat", "dog"),
        Err(Error::ResourceUnavailable { .. })
    ));
}

#[test]
fn test_missing_adjacency() {
    let (dir, config) = ladder();
    let config = config.with_adjacency_path(dir.path().join("absent.bin"));
    assert!(matches!(
        find_path(&config, "cat", "dog"),
        Err(Error::ResourceUnavailable { .. })
    ));
}

#[test]
fn test_truncated_adjacency() {
    let (_dir, config) = ladder();
    let bytes = std::fs::read(&config.adjacency_path).unwrap();
    std::fs::write(&config.adjacency_path, &bytes[..bytes.len() - 2]).unwrap();
    assert!(matches!(
        find_path(&config, "cat", "dog"),
        Err(Error::MalformedData(_))
    ));
}

#[test]
fn test_word_list_and_adjacency_disagree() {
    let (_dir, config) = write_fixture(&["cat", "cot", "cog"], vec![vec![1], vec![0]]);
    assert!(matches!(
        find_path(&config, "cat", "cot"),
        Err(Error::MalformedData(_))
    ));
}

#[test]
fn test_neighbor_past_dictionary() {
    let (_dir, config) = write_fixture(&["cat", "cot"], vec![vec![1], vec![5]]);
    assert!(matches!(
        find_path(&config, "cat", "cot"),
        Err(Error::MalformedData(_))
    ));
}

// ============================================================================
// 5. Config file
// ============================================================================

#[test]
fn test_config_from_json() {
    let (dir, config) = ladder();
    let config_path = dir.path().join("wordpath.json");
    std::fs::write(&config_path, serde_json::to_string(&config).unwrap()).unwrap();

    let loaded = GraphConfig::from_json_file(&config_path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(find_path(&loaded, "cat", "cog").unwrap(), strings(&["cat", "cot", "cog"]));
}
