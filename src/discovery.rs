// src/discovery.rs
use crate::config::{should_prune, Config};
use crate::error::Result;
use crate::lang::Lang;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Discovers source files under `root`, relative to it, in sorted order.
///
/// Prunes well-known build/VCS directories, keeps only files whose
/// extension maps to a supported language, then applies the config
/// include/exclude patterns.
///
/// # Errors
/// Currently infallible; the signature leaves room for fatal walk errors.
pub fn discover(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let raw_files = walk_filesystem(root, config.verbose);
    let source_files = filter_language(raw_files);
    let mut final_files = filter_config(source_files, config);
    final_files.sort();
    Ok(final_files)
}

fn walk_filesystem(root: &Path, verbose: bool) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_prune(&e.file_name().to_string_lossy()));

    let mut paths = Vec::new();
    let mut errors = 0;

    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    let p = entry.path().strip_prefix(root).unwrap_or(entry.path());
                    paths.push(p.to_path_buf());
                }
            }
            Err(_) => errors += 1,
        }
    }

    if errors > 0 && verbose {
        eprintln!("WARN: Encountered {errors} errors during file walk");
    }
    paths
}

fn filter_language(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|p| {
            p.extension()
                .and_then(|s| s.to_str())
                .and_then(Lang::from_ext)
                .is_some()
        })
        .collect()
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn filter_config(mut paths: Vec<PathBuf>, config: &Config) -> Vec<PathBuf> {
    if !config.include_patterns.is_empty() {
        paths.retain(|p| {
            let s = normalize_path(p);
            config.include_patterns.iter().any(|re| re.is_match(&s))
        });
    }

    if !config.exclude_patterns.is_empty() {
        paths.retain(|p| {
            let s = normalize_path(p);
            !config.exclude_patterns.iter().any(|re| re.is_match(&s))
        });
    }

    paths
}
