// src/graph/metrics.rs
//! Per-file importance metrics, computed once per graph load.

use super::impact;
use super::index::AdjacencyIndex;
use super::risk::RiskLevel;
use crate::types::DependencyGraph;
use serde::Serialize;

/// Weight applied to dependents when ranking importance. Breaking a
/// widely-depended-on file is costlier than a file with many imports.
pub const DEPENDENT_WEIGHT: usize = 2;

/// Derived metrics for one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileMetrics {
    pub id: String,
    pub dependent_count: usize,
    pub import_count: usize,
    pub importance: usize,
    pub is_entry_point: bool,
    pub risk_level: RiskLevel,
}

/// Computes metrics for every node, sorted descending by importance.
///
/// The sort is stable, so ties keep the node list's insertion order and
/// top-N selection is deterministic across repeated computation.
#[must_use]
pub fn aggregate(graph: &DependencyGraph, index: &AdjacencyIndex) -> Vec<FileMetrics> {
    let mut metrics: Vec<FileMetrics> = graph
        .nodes
        .iter()
        .map(|node| metrics_for_node(&node.id, index))
        .collect();

    metrics.sort_by(|a, b| b.importance.cmp(&a.importance));
    metrics
}

fn metrics_for_node(id: &str, index: &AdjacencyIndex) -> FileMetrics {
    let dependent_count = index.dependent_count(id);
    let import_count = index.import_count(id);

    FileMetrics {
        id: id.to_string(),
        dependent_count,
        import_count,
        importance: DEPENDENT_WEIGHT * dependent_count + import_count,
        is_entry_point: impact::is_entry_point(index, id),
        risk_level: RiskLevel::classify(dependent_count),
    }
}

/// Ids of the `n` most important files.
#[must_use]
pub fn top_files(metrics: &[FileMetrics], n: usize) -> Vec<String> {
    metrics.iter().take(n).map(|m| m.id.clone()).collect()
}

/// Entry-point ids, in the same importance order as the full metric set.
#[must_use]
pub fn entry_points(metrics: &[FileMetrics]) -> Vec<String> {
    metrics
        .iter()
        .filter(|m| m.is_entry_point)
        .map(|m| m.id.clone())
        .collect()
}
