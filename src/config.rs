// src/config.rs
//! Scan configuration: `blastmap.toml` plus `.blastmapignore`.
//!
//! Both files are optional. A missing or unparsable config falls back to
//! defaults; individual invalid patterns are skipped, not fatal.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "blastmap.toml";
pub const IGNORE_FILE: &str = ".blastmapignore";

/// Directories never descended into during a scan.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    ".blastmap",
    "node_modules",
    "dist",
    "build",
    "target",
    ".venv",
    "venv",
    ".tox",
    ".cache",
    "coverage",
    "vendor",
    "third_party",
];

/// Returns true if a directory name should be pruned from the walk.
#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub include_patterns: Vec<Regex>,
    pub exclude_patterns: Vec<Regex>,
    pub top_count: usize,
    pub cache_enabled: bool,
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            top_count: default_top_count(),
            cache_enabled: default_cache_enabled(),
            verbose: false,
        }
    }

    /// Loads `blastmap.toml` and `.blastmapignore` from the given directory.
    #[must_use]
    pub fn load_from(dir: &Path) -> Self {
        let mut config = Self::new();
        config.apply_toml_file(&dir.join(CONFIG_FILE));
        config.apply_ignore_file(&dir.join(IGNORE_FILE));
        config
    }

    /// Loads configuration from the current directory.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new("."))
    }

    fn apply_toml_file(&mut self, path: &Path) {
        let Ok(content) = fs::read_to_string(path) else {
            return;
        };
        self.parse_toml(&content);
    }

    /// Applies settings from TOML content. Unparsable content is ignored.
    pub fn parse_toml(&mut self, content: &str) {
        let Ok(parsed) = toml::from_str::<BlastmapToml>(content) else {
            if self.verbose {
                eprintln!("WARN: Ignoring invalid {CONFIG_FILE}");
            }
            return;
        };

        self.top_count = parsed.report.top_count;
        self.cache_enabled = parsed.cache.enabled;

        for pattern in &parsed.scan.include {
            self.push_pattern(pattern, true);
        }
        for pattern in &parsed.scan.exclude {
            self.push_pattern(pattern, false);
        }
    }

    fn apply_ignore_file(&mut self, path: &Path) {
        let Ok(content) = fs::read_to_string(path) else {
            return;
        };
        for line in content.lines() {
            self.process_ignore_line(line);
        }
    }

    /// Folds one `.blastmapignore` line into the exclude patterns.
    pub fn process_ignore_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return;
        }
        self.push_pattern(trimmed, false);
    }

    fn push_pattern(&mut self, pattern: &str, include: bool) {
        match Regex::new(pattern) {
            Ok(re) if include => self.include_patterns.push(re),
            Ok(re) => self.exclude_patterns.push(re),
            Err(_) => {
                if self.verbose {
                    eprintln!("WARN: Skipping invalid pattern: {pattern}");
                }
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk shape of `blastmap.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlastmapToml {
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub report: ReportSection,
    #[serde(default)]
    pub cache: CacheSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSection {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    #[serde(default = "default_top_count")]
    pub top_count: usize,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            top_count: default_top_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSection {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
        }
    }
}

fn default_top_count() -> usize {
    10
}

fn default_cache_enabled() -> bool {
    true
}
