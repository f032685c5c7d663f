// src/types.rs
//! The graph input contract shared by the scanner, the cache, and the engine.

use crate::error::{BlastmapError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single file in the dependency graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Raw import statement count, including imports that never resolved
    /// to a file in the graph (stdlib, third-party).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_count: Option<usize>,
}

impl GraphNode {
    /// Creates a bare node with only an id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            language: None,
            import_count: None,
        }
    }
}

/// A directed edge: `source` imports `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A full graph snapshot. Immutable once loaded; rebuilt wholesale on reload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl DependencyGraph {
    /// Loads a graph from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid graph JSON.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| BlastmapError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Serializes the graph as pretty JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
