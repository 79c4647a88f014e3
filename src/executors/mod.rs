//! Command executors that handle the actual logic for each command

pub mod graph;
pub mod lineup;
pub mod resolve;

use std::path::Path;

use miette::{Result, WrapErr};

use crate::graph::DependencyGraphBuilder;
use crate::progress::ProgressReporter;
use crate::provider::{NodePackageProvider, ProviderOptions};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Walk every package installed below `path` into a graph
pub(crate) fn walk_installed_packages(
    path: &Path,
    root_configuration: Option<serde_json::Value>,
    config_path: Option<std::path::PathBuf>,
) -> Result<DependencyGraphBuilder> {
    let options = ProviderOptions::builder()
        .with_cwd(path)
        .with_root_configuration(root_configuration)
        .with_root_config_path(config_path)
        .build()
        .wrap_err("Failed to configure the package provider")?;
    let provider = NodePackageProvider::new(options);

    let mut progress = ProgressReporter::new();
    progress.start_walk();

    let mut graph_builder = DependencyGraphBuilder::new();
    graph_builder
        .build(&provider, Some(&progress))
        .wrap_err_with(|| format!("Failed to walk packages from '{}'", path.display()))?;

    progress.finish_walk(graph_builder.package_count());

    Ok(graph_builder)
}
