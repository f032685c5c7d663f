// src/graph/impact.rs
//! Depth-tagged dependent traversal for a single selected file.

use super::index::AdjacencyIndex;
use super::risk::RiskLevel;
use serde::Serialize;
use std::collections::HashSet;

/// Impact of changing one file. Recomputed per query, never cached
/// across different selected files.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactResult {
    /// Dependents discovered at depth 0, in discovery order.
    pub direct_dependents: Vec<String>,
    /// Dependents discovered at depth >= 1, excluding anything direct.
    pub transitive_dependents: Vec<String>,
    pub risk_level: RiskLevel,
    pub risk_score: usize,
    pub is_entry_point: bool,
}

impl ImpactResult {
    /// Direct followed by transitive dependents.
    #[must_use]
    pub fn all_dependents(&self) -> Vec<String> {
        let mut all = self.direct_dependents.clone();
        all.extend(self.transitive_dependents.iter().cloned());
        all
    }
}

/// Computes direct and transitive dependents of `file_id`.
///
/// DFS from the file at depth 0. Dependent sets are sorted before visiting
/// so discovery order is deterministic. A global visited set guards against
/// cycles and also makes a dependent reachable both directly and transitively
/// count once, as direct. `max_depth` caps recursion (`None` = unlimited).
/// An unknown file id yields an empty result, not an error.
#[must_use]
pub fn dependents_of(
    index: &AdjacencyIndex,
    file_id: &str,
    max_depth: Option<usize>,
) -> ImpactResult {
    let mut traversal = Traversal {
        index,
        origin: file_id,
        max_depth,
        visited: HashSet::new(),
        direct: Vec::new(),
        transitive: Vec::new(),
    };
    traversal.visit(file_id, 0);

    let risk_score = traversal.direct.len() + traversal.transitive.len();

    ImpactResult {
        direct_dependents: traversal.direct,
        transitive_dependents: traversal.transitive,
        risk_level: RiskLevel::classify(risk_score),
        risk_score,
        is_entry_point: is_entry_point(index, file_id),
    }
}

/// A file is an entry point iff it has at least one dependent and its own
/// import set is empty. Known approximation: an orphan that gains a single
/// dependent is indistinguishable from a true dependency-tree root.
#[must_use]
pub fn is_entry_point(index: &AdjacencyIndex, id: &str) -> bool {
    index.dependent_count(id) > 0 && index.imports.get(id).map_or(true, HashSet::is_empty)
}

struct Traversal<'a> {
    index: &'a AdjacencyIndex,
    origin: &'a str,
    max_depth: Option<usize>,
    visited: HashSet<String>,
    direct: Vec<String>,
    transitive: Vec<String>,
}

impl Traversal<'_> {
    // Records every unvisited dependent of `node` before descending into
    // any of them, so a dependent reachable both directly and transitively
    // is always claimed at the shallower depth.
    fn visit(&mut self, node: &str, depth: usize) {
        let Some(dependents) = self.index.dependents.get(node) else {
            return;
        };

        let mut sorted: Vec<&String> = dependents.iter().collect();
        sorted.sort();

        let mut discovered = Vec::new();
        for dep in sorted {
            if dep == self.origin || self.visited.contains(dep) {
                continue;
            }
            self.visited.insert(dep.clone());

            if depth == 0 {
                self.direct.push(dep.clone());
            } else {
                self.transitive.push(dep.clone());
            }
            discovered.push(dep.clone());
        }

        if self.max_depth.map_or(true, |max| depth < max) {
            for dep in discovered {
                self.visit(&dep, depth + 1);
            }
        }
    }
}
