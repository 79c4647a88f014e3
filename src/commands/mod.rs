//! Command implementations for the npm-dep-graph CLI
//!
//! This module contains the implementations for each CLI command:
//! - graph: Render the installed dependency graph
//! - lineup: List every distinct installed package
//! - resolve: Show where a single module name resolves to

pub mod graph;
pub mod lineup;
pub mod resolve;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Graph { .. } => graph::execute_graph_command(command),
        Commands::Lineup { .. } => lineup::execute_lineup_command(command),
        Commands::Resolve { .. } => resolve::execute_resolve_command(command),
    }
}
