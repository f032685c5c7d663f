// src/cli/handlers.rs
use crate::cache;
use crate::config::Config;
use crate::graph::GraphEngine;
use crate::insights;
use crate::reporting;
use crate::scan;
use crate::types::DependencyGraph;
use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the graph for a query command: explicit `--graph` file if
/// given, else the cache, else a fresh scan of the current directory
/// (which refreshes the cache).
fn load_engine(graph_file: Option<&Path>, config: &Config) -> Result<GraphEngine> {
    let graph = match graph_file {
        Some(path) => DependencyGraph::from_json_file(path)
            .with_context(|| format!("Failed to load graph from {}", path.display()))?,
        None => load_or_scan(config)?,
    };
    Ok(GraphEngine::build(graph))
}

fn load_or_scan(config: &Config) -> Result<DependencyGraph> {
    let here = Path::new(".");

    if config.cache_enabled {
        if let Some(graph) = cache::load(here, cache::DEFAULT_NAME) {
            if config.verbose {
                eprintln!("Using cached dependency graph");
            }
            return Ok(graph);
        }
    }

    let graph = scan::scan(here, config)?;
    refresh_cache(here, &graph, config);
    Ok(graph)
}

fn refresh_cache(dir: &Path, graph: &DependencyGraph, config: &Config) {
    if !config.cache_enabled {
        return;
    }
    // A failed cache write degrades to re-scanning next time.
    if let Err(e) = cache::save(dir, cache::DEFAULT_NAME, graph) {
        if config.verbose {
            eprintln!("WARN: Failed to write graph cache: {e}");
        }
    }
}

/// Handles the scan command.
///
/// # Errors
/// Returns error if the tree cannot be scanned or the output file written.
pub fn handle_scan(path: &Path, out: Option<&Path>, config: &Config) -> Result<()> {
    let graph = scan::scan(path, config)?;
    refresh_cache(path, &graph, config);

    let json = graph.to_json()?;
    match out {
        Some(file) => {
            fs::write(file, &json)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            println!(
                "Scanned {} files, {} dependencies -> {}",
                graph.nodes.len(),
                graph.edges.len(),
                file.display().to_string().cyan()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Handles the impact command.
///
/// # Errors
/// Returns error if the graph cannot be loaded.
pub fn handle_impact(
    file: &str,
    depth: Option<usize>,
    graph_file: Option<&PathBuf>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let engine = load_engine(graph_file.map(PathBuf::as_path), config)?;
    let impact = engine.dependents_of(file, depth);

    if json {
        return reporting::print_json(&impact);
    }
    print!("{}", reporting::format_impact(file, &impact));
    Ok(())
}

/// Handles the top command.
///
/// # Errors
/// Returns error if the graph cannot be loaded.
pub fn handle_top(
    count: Option<usize>,
    graph_file: Option<&PathBuf>,
    config: &Config,
) -> Result<()> {
    let engine = load_engine(graph_file.map(PathBuf::as_path), config)?;
    let n = count.unwrap_or(config.top_count);
    print!("{}", reporting::format_top_table(engine.file_metrics(), n));
    Ok(())
}

/// Handles the map command.
///
/// # Errors
/// Returns error if the graph cannot be loaded.
pub fn handle_map(
    expand: &[String],
    graph_file: Option<&PathBuf>,
    config: &Config,
) -> Result<()> {
    let engine = load_engine(graph_file.map(PathBuf::as_path), config)?;
    let expanded: HashSet<String> = expand.iter().cloned().collect();
    let (clusters, roots) = engine.clusters(&expanded);
    print!("{}", reporting::format_cluster_tree(&clusters, &roots));
    Ok(())
}

/// Handles the matrix command.
///
/// # Errors
/// Returns error if the graph cannot be loaded.
pub fn handle_matrix(
    max: Option<usize>,
    graph_file: Option<&PathBuf>,
    config: &Config,
) -> Result<()> {
    let engine = load_engine(graph_file.map(PathBuf::as_path), config)?;
    let matrix = engine.matrix(max);

    let total = engine.graph().nodes.len();
    if total > matrix.size() {
        println!(
            "{}",
            format!("Showing first {} of {total} files", matrix.size()).dimmed()
        );
    }
    print!("{}", reporting::format_matrix(&matrix));
    Ok(())
}

/// Handles the insights command.
///
/// # Errors
/// Returns error if the graph cannot be loaded.
pub fn handle_insights(graph_file: Option<&PathBuf>, json: bool, config: &Config) -> Result<()> {
    let engine = load_engine(graph_file.map(PathBuf::as_path), config)?;
    let summary = insights::summarize(&engine);

    if json {
        return reporting::print_json(&summary);
    }
    print!("{}", reporting::format_insights(&summary));
    Ok(())
}
