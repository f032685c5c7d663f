use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blastmap", version, about = "Dependency graph and change impact analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Enable verbose diagnostics
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a source tree and emit graph JSON
    Scan {
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Write graph JSON to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Show direct and transitive dependents of a file
    Impact {
        /// File id (repository-relative path)
        file: String,
        /// Maximum traversal depth (default unlimited)
        #[arg(long, short)]
        depth: Option<usize>,
        /// Read the graph from a JSON file instead of cache/scan
        #[arg(long, value_name = "FILE")]
        graph: Option<PathBuf>,
        /// Emit JSON instead of the console report
        #[arg(long)]
        json: bool,
    },
    /// Rank files by importance
    Top {
        /// Number of files to show
        #[arg(long, short, value_name = "N")]
        count: Option<usize>,
        #[arg(long, value_name = "FILE")]
        graph: Option<PathBuf>,
    },
    /// Show the directory cluster tree
    Map {
        /// Directory paths to expand
        #[arg(long, short, value_name = "DIR")]
        expand: Vec<String>,
        #[arg(long, value_name = "FILE")]
        graph: Option<PathBuf>,
    },
    /// Show the dependency-structure matrix with circular pairs
    Matrix {
        /// Maximum rendered matrix size
        #[arg(long, value_name = "N")]
        max: Option<usize>,
        #[arg(long, value_name = "FILE")]
        graph: Option<PathBuf>,
    },
    /// Summarize the whole graph
    Insights {
        #[arg(long, value_name = "FILE")]
        graph: Option<PathBuf>,
        /// Emit JSON instead of the console report
        #[arg(long)]
        json: bool,
    },
}
