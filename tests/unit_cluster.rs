// tests/unit_cluster.rs
//! Tests for directory clustering and risk rollup.

use blastmap_core::graph::cluster::{self, ROOT_PATH};
use blastmap_core::graph::{FileMetrics, RiskLevel};
use std::collections::HashSet;

fn file(id: &str, risk: RiskLevel, dependent_count: usize) -> FileMetrics {
    FileMetrics {
        id: id.to_string(),
        dependent_count,
        import_count: 0,
        importance: 2 * dependent_count,
        is_entry_point: false,
        risk_level: risk,
    }
}

#[test]
fn test_two_flat_directories() {
    let files = vec![
        file("src/a.ts", RiskLevel::Low, 1),
        file("src/b.ts", RiskLevel::Low, 2),
        file("lib/c.ts", RiskLevel::Low, 0),
    ];
    let (clusters, roots) = cluster::build(&files, &HashSet::new());

    let src = clusters.get("src").expect("src cluster");
    assert_eq!(src.file_count, 2);
    assert_eq!(src.total_dependents, 3);
    assert_eq!(src.name, "src");

    let lib = clusters.get("lib").expect("lib cluster");
    assert_eq!(lib.file_count, 1);

    // Neither directory has a parent cluster, so both are roots.
    assert_eq!(roots, vec!["lib".to_string(), "src".to_string()]);
}

#[test]
fn test_root_files_use_sentinel() {
    let files = vec![file("main.rs", RiskLevel::Low, 0)];
    let (clusters, roots) = cluster::build(&files, &HashSet::new());

    assert!(clusters.contains_key(ROOT_PATH));
    assert_eq!(roots, vec![ROOT_PATH.to_string()]);
}

#[test]
fn test_max_risk_never_downgrades() {
    let files = vec![
        file("src/a.ts", RiskLevel::Critical, 40),
        file("src/b.ts", RiskLevel::Low, 0),
        file("src/c.ts", RiskLevel::Medium, 6),
    ];
    let (clusters, _) = cluster::build(&files, &HashSet::new());

    assert_eq!(
        clusters.get("src").map(|c| c.max_risk),
        Some(RiskLevel::Critical)
    );
}

#[test]
fn test_nested_parent_linking() {
    let files = vec![
        file("src/a.ts", RiskLevel::Low, 0),
        file("src/ui/panel.ts", RiskLevel::High, 20),
        file("src/ui/widgets/button.ts", RiskLevel::Low, 0),
    ];
    let (clusters, roots) = cluster::build(&files, &HashSet::new());

    // src/ui is a child of src; src/ui/widgets is a child of src/ui.
    assert_eq!(
        clusters.get("src").map(|c| c.children.clone()),
        Some(vec!["src/ui".to_string()])
    );
    assert_eq!(
        clusters.get("src/ui").map(|c| c.children.clone()),
        Some(vec!["src/ui/widgets".to_string()])
    );
    assert_eq!(roots, vec!["src".to_string()]);

    // Risk rolls up per directory, not across the tree.
    assert_eq!(
        clusters.get("src").map(|c| c.max_risk),
        Some(RiskLevel::Low)
    );
    assert_eq!(
        clusters.get("src/ui").map(|c| c.max_risk),
        Some(RiskLevel::High)
    );
}

#[test]
fn test_orphan_subdirectory_is_root() {
    // No file lives directly in "src", so "src/deep" has no parent cluster.
    let files = vec![file("src/deep/x.ts", RiskLevel::Low, 0)];
    let (clusters, roots) = cluster::build(&files, &HashSet::new());

    assert!(clusters.contains_key("src/deep"));
    assert!(!clusters.contains_key("src"));
    assert_eq!(roots, vec!["src/deep".to_string()]);
}

#[test]
fn test_expansion_is_read_only_lookup() {
    let files = vec![
        file("src/a.ts", RiskLevel::Low, 0),
        file("lib/b.ts", RiskLevel::Low, 0),
    ];
    let mut expanded = HashSet::new();
    expanded.insert("src".to_string());

    let (clusters, _) = cluster::build(&files, &expanded);
    assert_eq!(clusters.get("src").map(|c| c.is_expanded), Some(true));
    assert_eq!(clusters.get("lib").map(|c| c.is_expanded), Some(false));

    // The expansion set itself is untouched by clustering.
    assert_eq!(expanded.len(), 1);
}

#[test]
fn test_recluster_after_toggle() {
    let files = vec![file("src/a.ts", RiskLevel::Low, 0)];
    let mut expanded = HashSet::new();

    cluster::toggle(&mut expanded, "src");
    let (clusters, _) = cluster::build(&files, &expanded);
    assert_eq!(clusters.get("src").map(|c| c.is_expanded), Some(true));

    cluster::toggle(&mut expanded, "src");
    let (clusters, _) = cluster::build(&files, &expanded);
    assert_eq!(clusters.get("src").map(|c| c.is_expanded), Some(false));
}
