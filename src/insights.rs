// src/insights.rs
//! Whole-graph aggregates for the summary view.

use crate::graph::{GraphEngine, RiskLevel};
use serde::Serialize;

/// Summary aggregates over one graph snapshot. Pure derivation; nothing
/// here is cached inside the engine.
#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub total_files: usize,
    pub total_dependencies: usize,
    pub entry_points: usize,
    pub cycle_pairs: usize,
    pub risk: RiskBreakdown,
}

/// File counts per risk tier.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RiskBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

/// Summarizes a graph. Cycle pairs are counted over the untruncated
/// node set, not the rendered matrix subset.
#[must_use]
pub fn summarize(engine: &GraphEngine) -> Insights {
    let graph = engine.graph();
    let matrix = engine.matrix(Some(graph.nodes.len()));

    let mut risk = RiskBreakdown::default();
    for metric in engine.file_metrics() {
        match metric.risk_level {
            RiskLevel::Low => risk.low += 1,
            RiskLevel::Medium => risk.medium += 1,
            RiskLevel::High => risk.high += 1,
            RiskLevel::Critical => risk.critical += 1,
        }
    }

    Insights {
        total_files: graph.nodes.len(),
        total_dependencies: graph.edges.len(),
        entry_points: engine.entry_points().len(),
        cycle_pairs: matrix.total_cycles,
        risk,
    }
}
