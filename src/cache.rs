// src/cache.rs
//! Graph cache under `.blastmap/`, so repeated queries skip the scan.
//!
//! A cache miss is always silent: absent, unreadable, and unparsable
//! files all fall through to a fresh scan.

use crate::error::{BlastmapError, Result};
use crate::types::DependencyGraph;
use std::fs;
use std::path::{Path, PathBuf};

pub const CACHE_DIR: &str = ".blastmap";
pub const DEFAULT_NAME: &str = "graph";

/// Path of the cache file for a given graph name.
#[must_use]
pub fn cache_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(CACHE_DIR).join(format!("{name}.json"))
}

/// Writes the graph as pretty JSON, creating the cache directory on first
/// save. The write is atomic (temp file + rename).
///
/// # Errors
/// Returns an error if the directory cannot be created or the write fails.
pub fn save(dir: &Path, name: &str, graph: &DependencyGraph) -> Result<PathBuf> {
    let path = cache_path(dir, name);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| BlastmapError::Io {
            source,
            path: parent.to_path_buf(),
        })?;
    }

    let content = graph.to_json()?;
    atomic_write(&path, &content)?;
    Ok(path)
}

/// Reads a cached graph back. Returns `None` on any miss.
#[must_use]
pub fn load(dir: &Path, name: &str) -> Option<DependencyGraph> {
    let content = fs::read_to_string(cache_path(dir, name)).ok()?;
    serde_json::from_str(&content).ok()
}

fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content).map_err(|source| BlastmapError::Io {
        source,
        path: temp_path.clone(),
    })?;

    fs::rename(&temp_path, path).map_err(|source| BlastmapError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    Ok(())
}
