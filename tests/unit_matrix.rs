// tests/unit_matrix.rs
//! Tests for the dependency-structure matrix and cycle pairs.

use blastmap_core::graph::matrix;
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
fn test_cell_counts_preserve_multiplicity() {
    // Two import statements from a to b produce a count of 2.
    let g = graph(&["a", "b"], &[("a", "b"), ("a", "b")]);
    let m = matrix::build(&g, None);

    assert_eq!(m.matrix[0][1], 2);
    assert_eq!(m.matrix[1][0], 0);
    assert_eq!(m.total_deps, 2);
}

#[test]
fn test_cycle_pairs_are_symmetric() {
    let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "a"), ("b", "c")]);
    let m = matrix::build(&g, None);

    assert!(m.is_cycle("a", "b"));
    assert!(m.is_cycle("b", "a"));
    assert!(!m.is_cycle("b", "c"));
    assert_eq!(m.total_cycles, 1);
}

#[test]
fn test_diagonal_self_edge_excluded() {
    let g = graph(&["a", "b"], &[("a", "a"), ("a", "b")]);
    let m = matrix::build(&g, None);

    assert_eq!(m.matrix[0][0], 0, "self edge must not count as an import cell");
    assert_eq!(m.total_deps, 1);
    assert!(!m.is_cycle("a", "a"));
    assert_eq!(m.total_cycles, 0);
}

#[test]
fn test_truncation_keeps_first_entries() {
    let g = graph(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("c", "d"), ("d", "c")],
    );
    let m = matrix::build(&g, Some(2));

    assert_eq!(m.labels, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(m.size(), 2);
    // Edges touching truncated files disappear from the rendered subset.
    assert_eq!(m.total_deps, 1);
    assert_eq!(m.total_cycles, 0);
}

#[test]
fn test_truncation_is_deterministic() {
    let g = graph(&["a", "b", "c", "d"], &[("a", "b")]);
    let first = matrix::build(&g, Some(3));
    let second = matrix::build(&g, Some(3));

    assert_eq!(first.labels, second.labels);
    assert_eq!(first.labels, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
}

#[test]
fn test_short_labels_and_separators() {
    let g = graph(
        &["src/a.ts", "src/b.ts", "lib/c.ts", "lib/d.ts"],
        &[("src/a.ts", "lib/c.ts")],
    );
    let m = matrix::build(&g, None);

    assert_eq!(
        m.short_labels,
        vec![
            "a.ts".to_string(),
            "b.ts".to_string(),
            "c.ts".to_string(),
            "d.ts".to_string()
        ]
    );
    // The parent directory changes between index 1 and 2.
    assert_eq!(m.directory_separators, vec![2]);
}

#[test]
fn test_unknown_edge_endpoints_skipped() {
    let g = graph(&["a"], &[("a", "ghost"), ("ghost", "a")]);
    let m = matrix::build(&g, None);

    assert_eq!(m.total_deps, 0);
    assert_eq!(m.total_cycles, 0);
}

#[test]
fn test_empty_graph() {
    let m = matrix::build(&DependencyGraph::default(), None);

    assert!(m.labels.is_empty());
    assert!(m.matrix.is_empty());
    assert_eq!(m.total_deps, 0);
    assert_eq!(m.total_cycles, 0);
}
