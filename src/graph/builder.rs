use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use miette::{Result, WrapErr};
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{DependencyEdge, PackageNode};
use crate::core::GraphNode;
use crate::progress::ProgressReporter;
use crate::provider::GraphProvider;

/// Walks a provider into a complete package graph
///
/// This is the graph-engine side of the provider contract: it asks for the
/// root node, expands every node it has not seen before, and merges nodes
/// that share a canonical path. Cyclic installs therefore terminate.
pub struct DependencyGraphBuilder {
    graph: DiGraph<PackageNode, DependencyEdge>,
    path_indices: HashMap<PathBuf, NodeIndex>,
    root: Option<NodeIndex>,
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            path_indices: HashMap::new(),
            root: None,
        }
    }

    pub fn graph(&self) -> &DiGraph<PackageNode, DependencyEdge> {
        &self.graph
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn package_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Build the graph breadth-first from the provider's root node
    pub fn build<P: GraphProvider>(
        &mut self,
        provider: &P,
        progress: Option<&ProgressReporter>,
    ) -> Result<()> {
        let root = provider
            .get_root_node()
            .wrap_err("Failed to read the root package")?;

        let (root_idx, _) = self.intern(&root, true);
        self.root = Some(root_idx);

        let mut queue = VecDeque::from([(root_idx, root)]);

        while let Some((parent_idx, node)) = queue.pop_front() {
            if let Some(p) = progress {
                p.expanding_package(node.display_id());
            }

            let children = provider
                .expand(&node)
                .wrap_err_with(|| format!("Failed to expand dependencies of '{}'", node.display_id()))?;

            // expand keeps pending order, one child per descriptor
            for (child, descriptor) in children.into_iter().zip(node.pending_dependencies()) {
                let (child_idx, is_new) = self.intern(&child, false);
                self.graph.add_edge(
                    parent_idx,
                    child_idx,
                    DependencyEdge::new(descriptor.kind, descriptor.optional),
                );

                if is_new {
                    queue.push_back((child_idx, child));
                }
            }
        }

        Ok(())
    }

    fn intern(&mut self, node: &GraphNode, is_root: bool) -> (NodeIndex, bool) {
        if let Some(&idx) = self.path_indices.get(&node.path) {
            return (idx, false);
        }

        let idx = self
            .graph
            .add_node(PackageNode::from_graph_node(node, is_root));
        self.path_indices.insert(node.path.clone(), idx);
        (idx, true)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::provider::{NodePackageProvider, ProviderOptions};

    fn write_package(dir: &Path, manifest: serde_json::Value) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("package.json"), manifest.to_string()).unwrap();
    }

    fn walk(root: &Path) -> Result<DependencyGraphBuilder> {
        let provider =
            NodePackageProvider::new(ProviderOptions::builder().with_cwd(root).build()?);
        let mut builder = DependencyGraphBuilder::new();
        builder.build(&provider, None)?;
        Ok(builder)
    }

    #[test]
    fn test_walk_merges_shared_packages() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        write_package(&root, json!({"name": "app", "dependencies": {"a": "*", "b": "*"}}));
        write_package(
            &root.join("node_modules/a"),
            json!({"name": "a", "dependencies": {"shared": "*"}}),
        );
        write_package(
            &root.join("node_modules/b"),
            json!({"name": "b", "dependencies": {"shared": "*"}}),
        );
        write_package(&root.join("node_modules/shared"), json!({"name": "shared"}));

        let builder = walk(&root).unwrap();

        assert_eq!(builder.package_count(), 4);
        assert_eq!(builder.graph().edge_count(), 4);
        let root_idx = builder.root().unwrap();
        assert!(builder.graph()[root_idx].is_root);
    }

    #[test]
    fn test_walk_terminates_on_cycles() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        write_package(&root, json!({"name": "app", "dependencies": {"ping": "*"}}));
        write_package(
            &root.join("node_modules/ping"),
            json!({"name": "ping", "dependencies": {"pong": "*"}}),
        );
        write_package(
            &root.join("node_modules/pong"),
            json!({"name": "pong", "dependencies": {"ping": "*"}}),
        );

        let builder = walk(&root).unwrap();

        assert_eq!(builder.package_count(), 3);
        assert_eq!(builder.graph().edge_count(), 3);
    }

    #[test]
    fn test_walk_propagates_missing_dependency() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        write_package(&root, json!({"name": "app", "dependencies": {"lib": "*"}}));
        write_package(
            &root.join("node_modules/lib"),
            json!({"name": "lib", "dependencies": {"gone-missing-xyz": "*"}}),
        );

        let err = walk(&root).err().unwrap();
        assert!(
            err.chain()
                .any(|cause| cause.to_string().contains("gone-missing-xyz"))
        );
    }
}
