//! # Package Graph Provider
//!
//! The provider hands a project graph engine its nodes one level at a time.
//! The engine asks for the root node once, then calls `expand` on each node
//! it decides to visit; nothing beyond the requested level is computed.
//!
//! ## Example
//!
//! ```no_run
//! use npm_dep_graph::provider::{GraphProvider, NodePackageProvider, ProviderOptions};
//!
//! # fn main() -> miette::Result<()> {
//! let options = ProviderOptions::builder().with_cwd("/path/to/project").build()?;
//! let provider = NodePackageProvider::new(options);
//!
//! let root = provider.get_root_node()?;
//! for child in provider.expand(&root)? {
//!     println!("{} -> {}", root.display_id(), child.display_id());
//! }
//! # Ok(())
//! # }
//! ```

mod provider_impl;

pub use provider_impl::*;

use crate::core::GraphNode;
use crate::error::ProviderError;

/// The two operations a graph engine drives a provider with
pub trait GraphProvider {
    /// Locate the project and build its node
    fn get_root_node(&self) -> Result<GraphNode, ProviderError>;

    /// Build the children of `node`; a node with nothing pending yields an
    /// empty list
    fn expand(&self, node: &GraphNode) -> Result<Vec<GraphNode>, ProviderError>;
}
