//! # Graph Walking and Rendering Module
//!
//! This module drives a [`GraphProvider`](crate::provider::GraphProvider)
//! to completion and renders the result.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraphBuilder**: Expands every reachable package once,
//!   merging packages that share a canonical path
//! - **PackageNode**: One installed package in the graph
//! - **DependencyEdge**: The dependency kind linking a parent to a child
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders the graph as an ASCII tree, Mermaid, DOT or
//!   JSON
//!
//! ## Example
//!
//! ```
//! use std::path::PathBuf;
//!
//! use npm_dep_graph::core::DependencyKind;
//! use npm_dep_graph::graph::{DependencyEdge, GraphRenderer, PackageNode};
//! use petgraph::graph::DiGraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = DiGraph::new();
//!
//! let app = graph.add_node(PackageNode {
//!     name: Some("app".to_string()),
//!     version: Some("1.0.0".to_string()),
//!     path: PathBuf::from("/work/app"),
//!     optional: false,
//!     is_root: true,
//! });
//! let lodash = graph.add_node(PackageNode {
//!     name: Some("lodash".to_string()),
//!     version: Some("4.17.21".to_string()),
//!     path: PathBuf::from("/work/app/node_modules/lodash"),
//!     optional: false,
//!     is_root: false,
//! });
//! graph.add_edge(app, lodash, DependencyEdge::new(DependencyKind::Production, false));
//!
//! let mut output = Vec::new();
//! GraphRenderer::new(false).render_ascii(&graph, Some(app), &mut output)?;
//!
//! let tree = String::from_utf8(output)?;
//! assert!(tree.contains("└── lodash@4.17.21"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::DependencyGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::{DependencyEdge, PackageNode};
