//! # npm-dep-graph - Walk Installed npm Packages Into a Dependency Graph
//!
//! npm-dep-graph supplies the nodes of a project dependency graph from the
//! packages actually installed on disk. Starting at the nearest
//! `package.json`, it follows `dependencies`, `devDependencies` and
//! `optionalDependencies` through `node_modules` with the Node resolution
//! algorithm, collapsing symlinked installs to their real location.
//!
//! ## Main Components
//!
//! - **Manifest**: Finds and parses `package.json` files
//! - **Module Resolver**: Maps a module name to its installed directory
//! - **Analyzer**: Decides which declared dependencies a node will expand
//! - **Provider**: Builds root and child graph nodes on demand
//! - **Graph**: Walks a provider to completion and renders the result
//! - **Reports**: Lists the installed packages for humans or tools
//!
//! ## Usage
//!
//! ### Driving the provider directly
//!
//! ```no_run
//! use npm_dep_graph::provider::{GraphProvider, NodePackageProvider, ProviderOptions};
//!
//! # fn main() -> miette::Result<()> {
//! let provider = NodePackageProvider::new(
//!     ProviderOptions::builder()
//!         .with_cwd("/path/to/project")
//!         .with_root_configuration(Some(serde_json::json!({"type": "application"})))
//!         .build()?,
//! );
//!
//! let root = provider.get_root_node()?;
//! println!("{} has {} pending dependencies", root.display_id(), root.pending_dependencies().len());
//!
//! // Only the requested level is read from disk
//! for child in provider.expand(&root)? {
//!     println!("  {} at {}", child.display_id(), child.path().display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Walking and rendering the whole graph
//!
//! ```no_run
//! use npm_dep_graph::graph::{DependencyGraphBuilder, GraphRenderer};
//! use npm_dep_graph::provider::{NodePackageProvider, ProviderOptions};
//! use npm_dep_graph::reports::{HumanReportGenerator, ReportGenerator};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let provider =
//!     NodePackageProvider::new(ProviderOptions::builder().with_cwd(".").build()?);
//!
//! let mut graph_builder = DependencyGraphBuilder::new();
//! graph_builder.build(&provider, None)?;
//!
//! println!("{}", HumanReportGenerator::new().generate_report(&graph_builder)?);
//!
//! let mut mermaid_output = Vec::new();
//! GraphRenderer::new(false).render_mermaid(graph_builder.graph(), &mut mermaid_output)?;
//! std::fs::write("dependencies.mmd", mermaid_output).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod logging;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod graph;
pub mod manifest;
pub mod module_resolver;
pub mod provider;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    execute_command(cli.command)
}
