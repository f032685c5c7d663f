// src/reporting.rs
//! Console rendering for engine outputs.
//!
//! Reports are pure string builders; printing is the CLI's job. Risk tiers
//! are colored consistently everywhere: critical red/bold, high red,
//! medium yellow, low green.

use crate::graph::cluster::{ClusterMap, DirectoryCluster};
use crate::graph::{DependencyMatrix, FileMetrics, ImpactResult, RiskLevel};
use crate::insights::Insights;
use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// Colored label for a risk tier.
#[must_use]
pub fn risk_badge(risk: RiskLevel) -> ColoredString {
    match risk {
        RiskLevel::Critical => risk.label().red().bold(),
        RiskLevel::High => risk.label().red(),
        RiskLevel::Medium => risk.label().yellow(),
        RiskLevel::Low => risk.label().green(),
    }
}

/// Renders an impact report for one file.
#[must_use]
pub fn format_impact(file_id: &str, impact: &ImpactResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", file_id.bold());
    let _ = writeln!(
        out,
        "  risk: {}  affected files: {}{}",
        risk_badge(impact.risk_level),
        impact.risk_score,
        if impact.is_entry_point {
            "  (entry point)".cyan().to_string()
        } else {
            String::new()
        }
    );

    write_dependent_list(&mut out, "direct dependents", &impact.direct_dependents);
    write_dependent_list(
        &mut out,
        "transitive dependents",
        &impact.transitive_dependents,
    );

    if impact.risk_score == 0 {
        let _ = writeln!(out, "  {}", "nothing depends on this file".dimmed());
    }

    out
}

fn write_dependent_list(out: &mut String, title: &str, ids: &[String]) {
    if ids.is_empty() {
        return;
    }

    let _ = writeln!(out, "  {} ({})", title, ids.len());
    for (i, id) in ids.iter().enumerate() {
        let connector = if i == ids.len() - 1 {
            "└── "
        } else {
            "├── "
        };
        let _ = writeln!(out, "  {connector}{id}");
    }
}

/// Renders the top-N importance table.
#[must_use]
pub fn format_top_table(metrics: &[FileMetrics], n: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<4} {:<40} {:>6} {:>8} {:>6}  {}",
        "#".dimmed(),
        "file".dimmed(),
        "deps".dimmed(),
        "imports".dimmed(),
        "score".dimmed(),
        "risk".dimmed()
    );

    for (i, m) in metrics.iter().take(n).enumerate() {
        let marker = if m.is_entry_point { "*" } else { " " };
        let _ = writeln!(
            out,
            "{:<4} {marker}{:<39} {:>6} {:>8} {:>6}  {}",
            i + 1,
            m.id,
            m.dependent_count,
            m.import_count,
            m.importance,
            risk_badge(m.risk_level)
        );
    }

    out
}

/// Renders the directory cluster tree. Collapsed directories show only
/// their aggregate line; expanded ones list member files.
#[must_use]
pub fn format_cluster_tree(clusters: &ClusterMap, roots: &[String]) -> String {
    let mut out = String::new();
    for root in roots {
        if let Some(cluster) = clusters.get(root) {
            write_cluster(&mut out, clusters, cluster, 0);
        }
    }
    out
}

fn write_cluster(out: &mut String, clusters: &ClusterMap, cluster: &DirectoryCluster, depth: usize) {
    let indent = "  ".repeat(depth);
    let marker = if cluster.is_expanded { "▾" } else { "▸" };
    let meta = format!(
        "{} files, {} dependents",
        cluster.file_count, cluster.total_dependents
    )
    .dimmed();

    let _ = writeln!(
        out,
        "{indent}{marker} {}/  ({meta})  {}",
        cluster.name.blue().bold(),
        risk_badge(cluster.max_risk)
    );

    if cluster.is_expanded {
        for (i, file) in cluster.files.iter().enumerate() {
            let connector = if i == cluster.files.len() - 1 && cluster.children.is_empty() {
                "└── "
            } else {
                "├── "
            };
            let _ = writeln!(out, "{indent}  {connector}{file}");
        }
    }

    for child in &cluster.children {
        if let Some(child_cluster) = clusters.get(child) {
            write_cluster(out, clusters, child_cluster, depth + 1);
        }
    }
}

/// Renders the dependency-structure matrix with cycle highlighting.
#[must_use]
pub fn format_matrix(matrix: &DependencyMatrix) -> String {
    let mut out = String::new();
    let size = matrix.size();

    for (i, row) in matrix.matrix.iter().enumerate() {
        if matrix.directory_separators.contains(&i) {
            let _ = writeln!(out, "{:>3} {}", "", "─".repeat(24 + 3 * size).dimmed());
        }
        write_matrix_row(&mut out, matrix, i, row);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} dependencies, {} circular pairs",
        matrix.total_deps,
        if matrix.total_cycles > 0 {
            matrix.total_cycles.to_string().red().bold().to_string()
        } else {
            matrix.total_cycles.to_string()
        }
    );

    out
}

fn write_matrix_row(out: &mut String, matrix: &DependencyMatrix, i: usize, row: &[usize]) {
    let label = matrix.short_labels.get(i).map_or("", String::as_str);
    let _ = write!(out, "{:>3} {:<20}", i + 1, truncate_label(label, 20));

    for (j, &count) in row.iter().enumerate() {
        let cell = render_cell(matrix, i, j, count);
        let _ = write!(out, "{cell:>3}");
    }
    let _ = writeln!(out);
}

fn render_cell(matrix: &DependencyMatrix, i: usize, j: usize, count: usize) -> String {
    if i == j {
        return "–".dimmed().to_string();
    }
    if count == 0 {
        return "·".dimmed().to_string();
    }

    let in_cycle = match (matrix.labels.get(i), matrix.labels.get(j)) {
        (Some(a), Some(b)) => matrix.is_cycle(a, b),
        _ => false,
    };

    if in_cycle {
        count.to_string().red().bold().to_string()
    } else {
        count.to_string()
    }
}

fn truncate_label(label: &str, max: usize) -> String {
    let count = label.chars().count();
    if count <= max {
        return label.to_string();
    }
    let tail: String = label.chars().skip(count - (max - 1)).collect();
    format!("…{tail}")
}

/// Renders the insights summary.
#[must_use]
pub fn format_insights(insights: &Insights) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "files:          {}", insights.total_files);
    let _ = writeln!(out, "dependencies:   {}", insights.total_dependencies);
    let _ = writeln!(out, "entry points:   {}", insights.entry_points);
    let _ = writeln!(
        out,
        "circular pairs: {}",
        if insights.cycle_pairs > 0 {
            insights.cycle_pairs.to_string().red().bold().to_string()
        } else {
            insights.cycle_pairs.to_string()
        }
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "risk: {} {} / {} {} / {} {} / {} {}",
        insights.risk.critical,
        risk_badge(RiskLevel::Critical),
        insights.risk.high,
        risk_badge(RiskLevel::High),
        insights.risk.medium,
        risk_badge(RiskLevel::Medium),
        insights.risk.low,
        risk_badge(RiskLevel::Low)
    );

    out
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
