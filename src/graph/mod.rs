// src/graph/mod.rs
pub mod cluster;
pub mod impact;
pub mod index;
pub mod matrix;
pub mod metrics;
pub mod risk;

pub use impact::ImpactResult;
pub use index::AdjacencyIndex;
pub use matrix::DependencyMatrix;
pub use metrics::FileMetrics;
pub use risk::RiskLevel;

use crate::types::DependencyGraph;
use cluster::ClusterMap;
use std::collections::HashSet;

/// Query facade over one immutable graph snapshot.
///
/// The adjacency index and metrics are derived once per load; everything
/// else is recomputed per query from those.
pub struct GraphEngine {
    graph: DependencyGraph,
    index: AdjacencyIndex,
    metrics: Vec<FileMetrics>,
}

impl GraphEngine {
    #[must_use]
    pub fn build(graph: DependencyGraph) -> Self {
        let index = AdjacencyIndex::build(&graph);
        let metrics = metrics::aggregate(&graph, &index);
        Self {
            graph,
            index,
            metrics,
        }
    }

    #[must_use]
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    #[must_use]
    pub fn index(&self) -> &AdjacencyIndex {
        &self.index
    }

    /// Direct and transitive dependents of a file.
    #[must_use]
    pub fn dependents_of(&self, file_id: &str, max_depth: Option<usize>) -> ImpactResult {
        impact::dependents_of(&self.index, file_id, max_depth)
    }

    /// Files the given file imports.
    #[must_use]
    pub fn imports_of(&self, file_id: &str) -> Vec<String> {
        self.index.imports_of(file_id)
    }

    /// Full metric set, sorted descending by importance.
    #[must_use]
    pub fn file_metrics(&self) -> &[FileMetrics] {
        &self.metrics
    }

    #[must_use]
    pub fn metrics_for(&self, file_id: &str) -> Option<&FileMetrics> {
        self.metrics.iter().find(|m| m.id == file_id)
    }

    #[must_use]
    pub fn top_files(&self, n: usize) -> Vec<String> {
        metrics::top_files(&self.metrics, n)
    }

    #[must_use]
    pub fn entry_points(&self) -> Vec<String> {
        metrics::entry_points(&self.metrics)
    }

    /// Directory clusters plus root directories. Expansion state belongs
    /// to the caller and is only read here.
    #[must_use]
    pub fn clusters(&self, expanded: &HashSet<String>) -> (ClusterMap, Vec<String>) {
        cluster::build(&self.metrics, expanded)
    }

    /// Parent directory path for a file.
    #[must_use]
    pub fn cluster_for(&self, file_id: &str) -> String {
        cluster::parent_directory(file_id)
    }

    /// Dependency-structure matrix over the first `max_size` files.
    #[must_use]
    pub fn matrix(&self, max_size: Option<usize>) -> DependencyMatrix {
        matrix::build(&self.graph, max_size)
    }

    /// Whole-graph summary aggregates.
    #[must_use]
    pub fn insights(&self) -> crate::insights::Insights {
        crate::insights::summarize(self)
    }
}
