// src/scan/resolver.rs
//! Maps raw import strings to files on disk.
//!
//! Imports that resolve outside the scanned tree, or not at all
//! (stdlib, third-party packages), return `None` and are dropped from
//! the graph by the caller.

use crate::lang::Lang;
use std::path::{Path, PathBuf};

const TS_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "json"];
const TS_INDEX_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Resolves an import string to a likely file path on disk.
#[must_use]
pub fn resolve(root: &Path, current_file: &Path, import_str: &str) -> Option<PathBuf> {
    let ext = current_file.extension().and_then(|s| s.to_str())?;

    match Lang::from_ext(ext)? {
        Lang::Rust => resolve_rust(root, current_file, import_str),
        Lang::TypeScript => resolve_ts(current_file, import_str),
        Lang::Python => resolve_python(root, import_str),
    }
}

fn resolve_rust(root: &Path, current: &Path, import: &str) -> Option<PathBuf> {
    if let Some(rest) = import.strip_prefix("crate::") {
        let parts: Vec<&str> = rest.split("::").collect();
        return probe_rust_path(&root.join("src"), &parts);
    }
    if import.starts_with("super::") {
        return resolve_rust_super(current, import);
    }
    if let Some(rest) = import.strip_prefix("self::") {
        let parts: Vec<&str> = rest.split("::").collect();
        return probe_rust_path(current.parent()?, &parts);
    }
    if !import.contains("::") {
        // Bare `mod` declarations and single-segment uses are siblings.
        return probe_rust_path(current.parent()?, &[import]);
    }
    None
}

fn resolve_rust_super(current: &Path, import: &str) -> Option<PathBuf> {
    let mut parts: Vec<&str> = import.split("::").collect();
    let mut dir = current.parent()?;

    while parts.first() == Some(&"super") {
        parts.remove(0);
        dir = dir.parent()?;
    }

    if parts.is_empty() {
        return None;
    }
    probe_rust_path(dir, &parts)
}

/// Probes the full module path, then retries without the trailing segment
/// (`use crate::config::Config` names a type inside `config.rs`).
fn probe_rust_path(base: &Path, parts: &[&str]) -> Option<PathBuf> {
    if let Some(found) = probe_rust_module(base, parts) {
        return Some(found);
    }
    if parts.len() > 1 {
        return probe_rust_module(base, &parts[..parts.len() - 1]);
    }
    None
}

/// Probes `base/a/b.rs` then `base/a/b/mod.rs` for a module path.
fn probe_rust_module(base: &Path, parts: &[&str]) -> Option<PathBuf> {
    let mut current = base.to_path_buf();
    for part in parts {
        current.push(part);
    }

    let file_path = current.with_extension("rs");
    if file_path.is_file() {
        return Some(file_path);
    }

    let mod_path = current.join("mod.rs");
    if mod_path.is_file() {
        return Some(mod_path);
    }

    None
}

fn resolve_ts(current: &Path, import: &str) -> Option<PathBuf> {
    // Bare specifiers are package imports; only relative paths resolve
    // within the tree.
    if !import.starts_with('.') {
        return None;
    }

    let base = current.parent()?.join(import);
    probe_ts_file(&base).or_else(|| probe_ts_index(&base))
}

fn probe_ts_file(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }

    for ext in TS_EXTENSIONS {
        let candidate = path.with_extension(ext);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

fn probe_ts_index(path: &Path) -> Option<PathBuf> {
    if !path.is_dir() {
        return None;
    }

    for ext in TS_INDEX_EXTENSIONS {
        let candidate = path.join(format!("index.{ext}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

fn resolve_python(root: &Path, import: &str) -> Option<PathBuf> {
    // Relative imports (`from . import x`) are not resolved.
    if import.starts_with('.') {
        return None;
    }

    let mut current = root.to_path_buf();
    for part in import.split('.') {
        current.push(part);
    }

    let file_path = current.with_extension("py");
    if file_path.is_file() {
        return Some(file_path);
    }

    let init_path = current.join("__init__.py");
    if init_path.is_file() {
        return Some(init_path);
    }

    None
}
