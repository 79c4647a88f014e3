use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "npm-dep-graph",
    about = "📦 Walk installed npm packages into a dependency graph",
    long_about = "npm-dep-graph starts at the nearest package.json, follows dependencies, \
                  devDependencies and optionalDependencies through node_modules using the \
                  Node resolution algorithm, and reports the packages actually installed on \
                  disk. Symlinked installs are collapsed to their real location.",
    version
)]
pub struct Cli {
    /// Print resolution details to stderr
    #[arg(short, long, global = true, env = "NPM_DEP_GRAPH_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the installed dependency graph
    ///
    /// Walks every package reachable from the project and renders the
    /// result as a tree, a Mermaid or DOT diagram, or JSON.
    #[command(
        long_about = "Walk the project's installed dependencies and render the resulting graph. \
                      Each installed package appears once, keyed by its real path; packages \
                      reached again are marked as deduped in the tree view. Development \
                      dependencies of installed packages and optional dependencies are only \
                      followed when they are actually installed."
    )]
    Graph {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "NPM_DEP_GRAPH_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "NPM_DEP_GRAPH_OUTPUT")]
        output: Option<PathBuf>,

        /// Include package paths in node labels
        #[arg(long, env = "NPM_DEP_GRAPH_SHOW_PATHS")]
        show_paths: bool,
    },

    /// List every distinct installed package in the graph
    #[command(
        long_about = "List each distinct package reachable from the project, with its version and \
                      real path. Packages only reachable through development or optional \
                      dependencies are marked."
    )]
    Lineup {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Show where a module name resolves to from a directory
    Resolve {
        /// Name of the module to resolve
        #[arg(value_name = "MODULE", env = "NPM_DEP_GRAPH_MODULE")]
        module: String,

        /// Directory to resolve from (defaults to current directory)
        #[arg(long, value_name = "DIR", env = "NPM_DEP_GRAPH_FROM")]
        from: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
    Json,
}
