//! Command dispatch logic extracted from the binary to keep main small.

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut config = Config::load();
    config.verbose = cli.verbose;

    match &cli.command {
        Commands::Scan { path, out } => handlers::handle_scan(path, out.as_deref(), &config),
        Commands::Impact {
            file,
            depth,
            graph,
            json,
        } => handlers::handle_impact(file, *depth, graph.as_ref(), *json, &config),
        Commands::Top { count, graph } => handlers::handle_top(*count, graph.as_ref(), &config),
        Commands::Map { expand, graph } => handlers::handle_map(expand, graph.as_ref(), &config),
        Commands::Matrix { max, graph } => handlers::handle_matrix(*max, graph.as_ref(), &config),
        Commands::Insights { graph, json } => {
            handlers::handle_insights(graph.as_ref(), *json, &config)
        }
    }
}
