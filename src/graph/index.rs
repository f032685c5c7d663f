// src/graph/index.rs
//! Bidirectional adjacency maps built from the flat node/edge list.

use crate::types::DependencyGraph;
use std::collections::{HashMap, HashSet};

/// Imports-of and dependents-of maps, plus per-node import counts.
///
/// Every known node id has an entry (possibly empty), so lookups never
/// need existence checks. Owned by one graph load; rebuilt wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyIndex {
    pub imports: HashMap<String, HashSet<String>>,
    pub dependents: HashMap<String, HashSet<String>>,
    pub import_counts: HashMap<String, usize>,
}

impl AdjacencyIndex {
    /// Builds the index from a graph snapshot.
    ///
    /// Edges referencing ids absent from the node list are tolerated but
    /// silently dropped, so no node's counts are inflated by phantom
    /// neighbors. Self-edges never enter the adjacency maps, so a node
    /// cannot appear as its own dependent anywhere downstream.
    #[must_use]
    pub fn build(graph: &DependencyGraph) -> Self {
        let mut imports: HashMap<String, HashSet<String>> = HashMap::new();
        let mut dependents: HashMap<String, HashSet<String>> = HashMap::new();

        for node in &graph.nodes {
            imports.entry(node.id.clone()).or_default();
            dependents.entry(node.id.clone()).or_default();
        }

        for edge in &graph.edges {
            if edge.source == edge.target {
                continue;
            }
            if !imports.contains_key(&edge.source) || !imports.contains_key(&edge.target) {
                continue;
            }
            if let Some(set) = imports.get_mut(&edge.source) {
                set.insert(edge.target.clone());
            }
            if let Some(set) = dependents.get_mut(&edge.target) {
                set.insert(edge.source.clone());
            }
        }

        let import_counts = count_imports(graph, &imports);

        Self {
            imports,
            dependents,
            import_counts,
        }
    }

    /// Files the given file imports, sorted for deterministic output.
    #[must_use]
    pub fn imports_of(&self, id: &str) -> Vec<String> {
        let mut result: Vec<String> = self
            .imports
            .get(id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        result.sort();
        result
    }

    /// Number of files that import the given file.
    #[must_use]
    pub fn dependent_count(&self, id: &str) -> usize {
        self.dependents.get(id).map_or(0, HashSet::len)
    }

    /// Import count for the given file (raw count when the node carried
    /// one, resolved adjacency size otherwise).
    #[must_use]
    pub fn import_count(&self, id: &str) -> usize {
        self.import_counts.get(id).copied().unwrap_or(0)
    }
}

fn count_imports(
    graph: &DependencyGraph,
    imports: &HashMap<String, HashSet<String>>,
) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for node in &graph.nodes {
        let count = node
            .import_count
            .unwrap_or_else(|| imports.get(&node.id).map_or(0, HashSet::len));
        counts.insert(node.id.clone(), count);
    }
    counts
}
