// src/scan/mod.rs
//! Repository scanner: builds the node/edge list from a local source tree.
//!
//! Discovery and per-file extraction are pure over file content; the only
//! ordering guarantee is that nodes come out sorted by path, which keeps
//! repeated scans of an unchanged tree byte-identical.

pub mod imports;
pub mod resolver;

use crate::config::Config;
use crate::discovery;
use crate::error::{BlastmapError, Result};
use crate::lang::Lang;
use crate::types::{DependencyGraph, GraphEdge, GraphNode};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

struct ScannedFile {
    rel: PathBuf,
    id: String,
    language: Option<&'static str>,
    imports: Vec<String>,
}

/// Scans a source tree into a dependency graph.
///
/// Unreadable files are skipped, not fatal. Imports that do not resolve to
/// a discovered file (stdlib, third-party, excluded paths) are dropped
/// silently.
///
/// # Errors
/// Returns an error if the root directory does not exist or discovery fails.
pub fn scan(root: &Path, config: &Config) -> Result<DependencyGraph> {
    let root = fs::canonicalize(root).map_err(|source| BlastmapError::Io {
        source,
        path: root.to_path_buf(),
    })?;

    let files = discovery::discover(&root, config)?;

    let scanned: Vec<ScannedFile> = files
        .par_iter()
        .filter_map(|rel| scan_file(&root, rel))
        .collect();

    Ok(assemble(&root, &scanned, config.verbose))
}

fn scan_file(root: &Path, rel: &Path) -> Option<ScannedFile> {
    let content = fs::read_to_string(root.join(rel)).ok()?;

    Some(ScannedFile {
        rel: rel.to_path_buf(),
        id: discovery::normalize_path(rel),
        language: rel
            .extension()
            .and_then(|s| s.to_str())
            .and_then(Lang::from_ext)
            .map(Lang::tag),
        imports: imports::extract(rel, &content),
    })
}

fn assemble(root: &Path, scanned: &[ScannedFile], verbose: bool) -> DependencyGraph {
    let known: HashSet<&str> = scanned.iter().map(|f| f.id.as_str()).collect();

    let nodes = scanned.iter().map(make_node).collect();

    let mut edges = Vec::new();
    let mut unresolved = 0usize;
    for file in scanned {
        collect_edges(root, file, &known, &mut edges, &mut unresolved);
    }

    if unresolved > 0 && verbose {
        eprintln!("WARN: {unresolved} imports did not resolve to scanned files");
    }

    DependencyGraph { nodes, edges }
}

fn make_node(file: &ScannedFile) -> GraphNode {
    GraphNode {
        id: file.id.clone(),
        label: file
            .rel
            .file_name()
            .map(|n| n.to_string_lossy().to_string()),
        language: file.language.map(str::to_string),
        import_count: Some(file.imports.len()),
    }
}

fn collect_edges(
    root: &Path,
    file: &ScannedFile,
    known: &HashSet<&str>,
    edges: &mut Vec<GraphEdge>,
    unresolved: &mut usize,
) {
    let current = root.join(&file.rel);

    for import in &file.imports {
        match resolve_to_id(root, &current, import) {
            Some(target) if known.contains(target.as_str()) => {
                edges.push(GraphEdge::new(file.id.clone(), target));
            }
            _ => *unresolved += 1,
        }
    }
}

fn resolve_to_id(root: &Path, current: &Path, import: &str) -> Option<String> {
    let resolved = resolver::resolve(root, current, import)?;
    let clean = normalize_components(&resolved);
    let rel = clean.strip_prefix(root).ok()?;
    Some(discovery::normalize_path(rel))
}

/// Collapses `.` and `..` components left behind by path joins.
fn normalize_components(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
