// src/graph/matrix.rs
//! Dense dependency-structure matrix with circular-pair detection.

use super::cluster;
use crate::types::DependencyGraph;
use std::collections::{HashMap, HashSet};

/// Upper bound on rendered matrix size. Larger graphs truncate to the
/// first N entries in supplied node order, never a random subset.
pub const MAX_RENDER_SIZE: usize = 100;

/// The file-by-file matrix view. `matrix[i][j]` is the number of import
/// edges from file i to file j.
#[derive(Debug, Clone)]
pub struct DependencyMatrix {
    pub labels: Vec<String>,
    /// Last path segment of each label, for compact axis display.
    pub short_labels: Vec<String>,
    pub matrix: Vec<Vec<usize>>,
    /// Row indices where the parent directory changes, for visual separators.
    pub directory_separators: Vec<usize>,
    /// Circular pairs, stored symmetrically: both (a, b) and (b, a) are
    /// present so lookups from either row/column order succeed.
    pub cycles: HashSet<(String, String)>,
    pub total_deps: usize,
    pub total_cycles: usize,
}

impl DependencyMatrix {
    /// True if the two files import each other.
    #[must_use]
    pub fn is_cycle(&self, a: &str, b: &str) -> bool {
        self.cycles.contains(&(a.to_string(), b.to_string()))
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.labels.len()
    }
}

/// Builds the matrix over the first `max_size` nodes (default
/// [`MAX_RENDER_SIZE`]) in supplied node order.
///
/// Diagonal cells are never ordinary import cells even when a self-edge
/// exists; they render as "self" and are excluded from cycle counting.
#[must_use]
pub fn build(graph: &DependencyGraph, max_size: Option<usize>) -> DependencyMatrix {
    let limit = max_size.unwrap_or(MAX_RENDER_SIZE);
    let labels: Vec<String> = graph
        .nodes
        .iter()
        .take(limit)
        .map(|n| n.id.clone())
        .collect();

    let index_of: HashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    let matrix = fill_cells(graph, &labels, &index_of);
    let total_deps = matrix.iter().flatten().sum();
    let cycles = collect_cycles(&labels, &matrix);
    let total_cycles = cycles.len() / 2;

    DependencyMatrix {
        short_labels: short_labels(&labels),
        directory_separators: directory_separators(&labels),
        labels,
        matrix,
        cycles,
        total_deps,
        total_cycles,
    }
}

fn fill_cells(
    graph: &DependencyGraph,
    labels: &[String],
    index_of: &HashMap<&str, usize>,
) -> Vec<Vec<usize>> {
    let mut matrix = vec![vec![0usize; labels.len()]; labels.len()];

    for edge in &graph.edges {
        let (Some(&i), Some(&j)) = (
            index_of.get(edge.source.as_str()),
            index_of.get(edge.target.as_str()),
        ) else {
            continue;
        };
        if i == j {
            continue;
        }
        if let Some(cell) = matrix.get_mut(i).and_then(|row| row.get_mut(j)) {
            *cell += 1;
        }
    }

    matrix
}

fn collect_cycles(labels: &[String], matrix: &[Vec<usize>]) -> HashSet<(String, String)> {
    let mut cycles = HashSet::new();

    for (i, a) in labels.iter().enumerate() {
        for (j, b) in labels.iter().enumerate().skip(i + 1) {
            let forward = cell(matrix, i, j) > 0;
            let backward = cell(matrix, j, i) > 0;
            if forward && backward {
                cycles.insert((a.clone(), b.clone()));
                cycles.insert((b.clone(), a.clone()));
            }
        }
    }

    cycles
}

fn cell(matrix: &[Vec<usize>], i: usize, j: usize) -> usize {
    matrix.get(i).and_then(|row| row.get(j)).copied().unwrap_or(0)
}

fn short_labels(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .map(|l| l.rsplit('/').next().unwrap_or(l).to_string())
        .collect()
}

fn directory_separators(labels: &[String]) -> Vec<usize> {
    let mut separators = Vec::new();
    for i in 1..labels.len() {
        let prev = cluster::parent_directory(&labels[i - 1]);
        let current = cluster::parent_directory(&labels[i]);
        if prev != current {
            separators.push(i);
        }
    }
    separators
}
