// tests/unit_index.rs
//! Tests for adjacency index construction.

use blastmap_core::graph::AdjacencyIndex;
use blastmap_core::types::{DependencyGraph, GraphEdge, GraphNode};

fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> DependencyGraph {
    DependencyGraph {
        nodes: nodes.iter().map(|id| GraphNode::new(*id)).collect(),
        edges: edges
            .iter()
            .map(|(s, t)| GraphEdge::new(*s, *t))
            .collect(),
    }
}

#[test]
fn test_basic_adjacency() {
    let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    let index = AdjacencyIndex::build(&g);

    assert_eq!(index.imports_of("a"), vec!["b".to_string()]);
    assert_eq!(index.imports_of("b"), vec!["c".to_string()]);
    assert_eq!(index.dependent_count("b"), 1);
    assert_eq!(index.dependent_count("c"), 1);
    assert_eq!(index.dependent_count("a"), 0);
}

#[test]
fn test_every_node_initialized() {
    let g = graph(&["lonely"], &[]);
    let index = AdjacencyIndex::build(&g);

    // Lookups on a node with no edges return empty, never panic.
    assert!(index.imports_of("lonely").is_empty());
    assert_eq!(index.dependent_count("lonely"), 0);
    assert!(index.imports.contains_key("lonely"));
    assert!(index.dependents.contains_key("lonely"));
}

#[test]
fn test_unknown_ids_tolerated() {
    let g = graph(&["a"], &[("a", "ghost"), ("phantom", "a")]);
    let index = AdjacencyIndex::build(&g);

    // Neither unknown endpoint gains an adjacency entry, and the known
    // node's counts are not inflated by phantom neighbors.
    assert!(!index.imports.contains_key("phantom"));
    assert!(!index.dependents.contains_key("ghost"));
    assert!(index.imports_of("ghost").is_empty());
    assert!(index.imports_of("a").is_empty());
    assert_eq!(index.dependent_count("a"), 0);
}

#[test]
fn test_self_edge_excluded() {
    let g = graph(&["a", "b"], &[("a", "a"), ("a", "b")]);
    let index = AdjacencyIndex::build(&g);

    assert_eq!(index.imports_of("a"), vec!["b".to_string()]);
    assert_eq!(index.dependent_count("a"), 0);
}

#[test]
fn test_duplicate_edges_stored_once() {
    let g = graph(&["a", "b"], &[("a", "b"), ("a", "b"), ("a", "b")]);
    let index = AdjacencyIndex::build(&g);

    assert_eq!(index.imports_of("a"), vec!["b".to_string()]);
    assert_eq!(index.dependent_count("b"), 1);
}

#[test]
fn test_rebuild_is_identical() {
    let g = graph(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")],
    );
    let first = AdjacencyIndex::build(&g);
    let second = AdjacencyIndex::build(&g);

    assert_eq!(first, second);
}

#[test]
fn test_import_counts() {
    let mut g = graph(&["a", "b"], &[("a", "b")]);
    // Node "a" carries a raw count (it also imported stdlib modules the
    // scanner could not resolve).
    g.nodes[0].import_count = Some(7);

    let index = AdjacencyIndex::build(&g);
    assert_eq!(index.import_count("a"), 7);
    // Node "b" has no raw count; the resolved adjacency size is used.
    assert_eq!(index.import_count("b"), 0);
}
