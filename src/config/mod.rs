//! # Configuration Module
//!
//! This module provides configuration structures for every npm-dep-graph
//! command. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **GraphOptions**: Configuration for the `graph` command to render the
//!   installed dependency graph
//! - **LineupConfig**: Configuration for the `lineup` command to list every
//!   distinct installed package
//! - **ResolveConfig**: Configuration for the `resolve` command to look up a
//!   single module
//!
//! ## Example
//!
//! ```
//! use npm_dep_graph::cli::GraphFormat;
//! use npm_dep_graph::common::ConfigBuilder;
//! use npm_dep_graph::config::{GraphOptions, ResolveConfig};
//!
//! let graph = GraphOptions::builder()
//!     .with_path(".".into())
//!     .with_format(GraphFormat::Mermaid)
//!     .with_output(None)
//!     .with_show_paths(false)
//!     .build()
//!     .unwrap();
//! assert_eq!(graph.format, GraphFormat::Mermaid);
//!
//! let resolve = ResolveConfig::builder()
//!     .with_module("lodash")
//!     .with_from(".".into())
//!     .build()
//!     .unwrap();
//! assert_eq!(resolve.module, "lodash");
//! ```

pub mod graph;
pub mod lineup;
pub mod resolve;

pub use graph::GraphOptions;
pub use lineup::LineupConfig;
pub use resolve::ResolveConfig;
