// src/graph/cluster.rs
//! Directory clustering: groups files by parent directory and rolls up risk.
//!
//! The computation is a pure function of (file metrics, expanded set).
//! Expansion state is owned by the caller; toggling never happens here.

use super::metrics::FileMetrics;
use super::risk::RiskLevel;
use std::collections::{BTreeMap, HashSet};

/// Sentinel path for files with no parent directory.
pub const ROOT_PATH: &str = "/";

pub type ClusterMap = BTreeMap<String, DirectoryCluster>;

/// One directory with aggregated member stats.
#[derive(Debug, Clone)]
pub struct DirectoryCluster {
    pub path: String,
    pub name: String,
    pub files: Vec<String>,
    pub children: Vec<String>,
    pub file_count: usize,
    pub total_dependents: usize,
    pub max_risk: RiskLevel,
    pub is_expanded: bool,
}

/// Builds the cluster map plus the set of root directories (directories
/// whose parent is absent from the map).
///
/// Two passes over a plain map: group and aggregate, then wire parent/child
/// links. Max risk starts from low and upgrades on any higher tier
/// encountered, never downgrades.
#[must_use]
pub fn build(files: &[FileMetrics], expanded: &HashSet<String>) -> (ClusterMap, Vec<String>) {
    let mut clusters: ClusterMap = BTreeMap::new();

    for file in files {
        let dir = parent_directory(&file.id);
        let cluster = clusters
            .entry(dir.clone())
            .or_insert_with(|| empty_cluster(&dir, expanded));

        cluster.files.push(file.id.clone());
        cluster.file_count += 1;
        cluster.total_dependents += file.dependent_count;
        cluster.max_risk = cluster.max_risk.max(file.risk_level);
    }

    let roots = link_parents(&mut clusters);
    (clusters, roots)
}

/// Returns the parent directory path for a file id. Root-level files map
/// to the sentinel root path.
#[must_use]
pub fn parent_directory(file_id: &str) -> String {
    match file_id.rsplit_once('/') {
        Some((dir, _)) if !dir.is_empty() => dir.to_string(),
        _ => ROOT_PATH.to_string(),
    }
}

/// Flips one directory in a caller-owned expansion set.
pub fn toggle(expanded: &mut HashSet<String>, path: &str) {
    if !expanded.remove(path) {
        expanded.insert(path.to_string());
    }
}

fn empty_cluster(path: &str, expanded: &HashSet<String>) -> DirectoryCluster {
    DirectoryCluster {
        path: path.to_string(),
        name: display_name(path),
        files: Vec::new(),
        children: Vec::new(),
        file_count: 0,
        total_dependents: 0,
        max_risk: RiskLevel::Low,
        is_expanded: expanded.contains(path),
    }
}

fn display_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}

/// Second pass: registers each directory under its parent cluster when that
/// parent exists in the map. Directories with no parent cluster are roots.
fn link_parents(clusters: &mut ClusterMap) -> Vec<String> {
    let paths: Vec<String> = clusters.keys().cloned().collect();
    let mut roots = Vec::new();

    for path in paths {
        match parent_of_directory(&path) {
            Some(parent) if clusters.contains_key(&parent) => {
                if let Some(cluster) = clusters.get_mut(&parent) {
                    cluster.children.push(path);
                }
            }
            _ => roots.push(path),
        }
    }

    roots
}

fn parent_of_directory(path: &str) -> Option<String> {
    if path == ROOT_PATH {
        return None;
    }
    path.rsplit_once('/').map(|(parent, _)| parent.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_directory() {
        assert_eq!(parent_directory("src/a.ts"), "src");
        assert_eq!(parent_directory("src/ui/panel.ts"), "src/ui");
        assert_eq!(parent_directory("main.rs"), "/");
    }

    #[test]
    fn test_toggle_roundtrip() {
        let mut expanded = HashSet::new();
        toggle(&mut expanded, "src");
        assert!(expanded.contains("src"));
        toggle(&mut expanded, "src");
        assert!(!expanded.contains("src"));
    }
}
