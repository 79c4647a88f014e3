use std::collections::HashSet;
use std::io::Write;

use miette::Result;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use serde_json::json;

use crate::core::DependencyKind;
use crate::error::AppError;
use crate::graph::{DependencyEdge, PackageNode};

mod colors {
    pub const ROOT_NODE_FILL: &str = "#FFF3E0";
    pub const ROOT_NODE_STROKE: &str = "#F57C00";
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD";
    pub const NORMAL_NODE_STROKE: &str = "#1976D2";
    pub const PROD_EDGE: &str = "#64B5F6";
    pub const DEV_EDGE: &str = "#90A4AE";
    pub const OPTIONAL_EDGE: &str = "#81C784";
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(AppError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(AppError::from)
    };
}

pub struct GraphRenderer {
    show_paths: bool,
}

impl GraphRenderer {
    pub fn new(show_paths: bool) -> Self {
        Self { show_paths }
    }

    /// Indented tree from `root`; a package already printed is shown again
    /// only as a `(deduped)` leaf
    pub fn render_ascii(
        &self,
        graph: &DiGraph<PackageNode, DependencyEdge>,
        root: Option<NodeIndex>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let Some(root) = root else {
            writeln_out!(output, "No packages found to visualize")?;
            return Ok(());
        };

        writeln_out!(output, "{}", self.describe(&graph[root]))?;

        let mut printed = HashSet::from([root]);
        self.render_children(graph, root, "", &mut printed, output)?;

        Ok(())
    }

    fn render_children(
        &self,
        graph: &DiGraph<PackageNode, DependencyEdge>,
        parent: NodeIndex,
        prefix: &str,
        printed: &mut HashSet<NodeIndex>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let edges = ordered_edges(graph, parent);

        for (i, (target, edge)) in edges.iter().enumerate() {
            let is_last = i == edges.len() - 1;
            let branch = if is_last { "└──" } else { "├──" };
            let first_visit = printed.insert(*target);

            writeln_out!(
                output,
                "{}{} {}{}{}",
                prefix,
                branch,
                self.describe(&graph[*target]),
                edge_marker(edge),
                if first_visit { "" } else { " (deduped)" }
            )?;

            if first_visit {
                let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
                self.render_children(graph, *target, &child_prefix, printed, output)?;
            }
        }

        Ok(())
    }

    fn describe(&self, node: &PackageNode) -> String {
        if self.show_paths {
            format!("{} ({})", node.label(), node.path().display())
        } else {
            node.label()
        }
    }

    pub fn render_mermaid(
        &self,
        graph: &DiGraph<PackageNode, DependencyEdge>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph TD")?;

        for idx in graph.node_indices() {
            writeln_out!(
                output,
                "    n{}[\"{}\"]",
                idx.index(),
                escape_quotes(&self.describe(&graph[idx]))
            )?;
        }

        for edge in edge_list(graph) {
            let (source, target, weight) = edge;
            let arrow = if weight.is_optional() { "-.->" } else { "-->" };
            match weight.kind {
                DependencyKind::Production => {
                    writeln_out!(output, "    n{} {} n{}", source.index(), arrow, target.index())?
                }
                kind => writeln_out!(
                    output,
                    "    n{} {}|{}| n{}",
                    source.index(),
                    arrow,
                    kind,
                    target.index()
                )?,
            }
        }

        for idx in graph.node_indices().filter(|&idx| graph[idx].is_root) {
            writeln_out!(
                output,
                "    style n{} fill:{},stroke:{},stroke-width:2px",
                idx.index(),
                colors::ROOT_NODE_FILL,
                colors::ROOT_NODE_STROKE
            )?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &DiGraph<PackageNode, DependencyEdge>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph package_dependencies {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for idx in graph.node_indices() {
            let node = &graph[idx];
            let (fill_color, stroke_color) = if node.is_root {
                (colors::ROOT_NODE_FILL, colors::ROOT_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };

            writeln_out!(
                output,
                r#"    "n{}" [label="{}", style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                idx.index(),
                escape_quotes(&self.describe(node)),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for (source, target, weight) in edge_list(graph) {
            let color = match weight.kind {
                DependencyKind::Production => colors::PROD_EDGE,
                DependencyKind::Development => colors::DEV_EDGE,
                DependencyKind::Optional => colors::OPTIONAL_EDGE,
            };
            let style = if weight.is_optional() { "dashed" } else { "solid" };

            writeln_out!(
                output,
                r#"    "n{}" -> "n{}" [label="{}", color="{}", style={}];"#,
                source.index(),
                target.index(),
                weight.kind,
                color,
                style
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_json(
        &self,
        graph: &DiGraph<PackageNode, DependencyEdge>,
        root: Option<NodeIndex>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let packages: Vec<_> = graph
            .node_indices()
            .map(|idx| {
                let node = &graph[idx];
                json!({
                    "name": node.name(),
                    "version": node.version(),
                    "path": node.path().display().to_string(),
                    "optional": node.optional,
                })
            })
            .collect();

        let edges: Vec<_> = edge_list(graph)
            .into_iter()
            .map(|(source, target, weight)| {
                json!({
                    "from": graph[source].name(),
                    "to": graph[target].name(),
                    "from_path": graph[source].path().display().to_string(),
                    "to_path": graph[target].path().display().to_string(),
                    "kind": weight.kind,
                    "optional": weight.optional,
                })
            })
            .collect();

        let report = json!({
            "root": root.and_then(|idx| graph[idx].name()),
            "package_count": graph.node_count(),
            "packages": packages,
            "edges": edges,
        });

        let rendered = serde_json::to_string_pretty(&report).map_err(AppError::Json)?;
        writeln_out!(output, "{}", rendered)?;
        Ok(())
    }
}

// petgraph walks outgoing edges newest first; restore insertion order
fn ordered_edges(
    graph: &DiGraph<PackageNode, DependencyEdge>,
    parent: NodeIndex,
) -> Vec<(NodeIndex, DependencyEdge)> {
    let mut edges: Vec<(EdgeIndex, NodeIndex, DependencyEdge)> = graph
        .edges(parent)
        .map(|edge| (edge.id(), edge.target(), *edge.weight()))
        .collect();
    edges.sort_by_key(|(id, _, _)| *id);
    edges
        .into_iter()
        .map(|(_, target, weight)| (target, weight))
        .collect()
}

fn edge_list(
    graph: &DiGraph<PackageNode, DependencyEdge>,
) -> Vec<(NodeIndex, NodeIndex, DependencyEdge)> {
    graph
        .edge_references()
        .map(|edge| (edge.source(), edge.target(), *edge.weight()))
        .collect()
}

fn edge_marker(edge: &DependencyEdge) -> &'static str {
    match (edge.kind, edge.optional) {
        (DependencyKind::Production, _) => "",
        (DependencyKind::Development, false) => " [dev]",
        (DependencyKind::Development, true) => " [dev, optional]",
        (DependencyKind::Optional, _) => " [optional]",
    }
}

fn escape_quotes(label: &str) -> String {
    label.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use predicates::prelude::*;
    use pretty_assertions::assert_eq;

    use super::*;

    fn package(name: &str, version: &str, is_root: bool) -> PackageNode {
        PackageNode {
            name: Some(name.to_string()),
            version: Some(version.to_string()),
            path: PathBuf::from(format!("/app/node_modules/{name}")),
            optional: false,
            is_root,
        }
    }

    fn sample_graph() -> (DiGraph<PackageNode, DependencyEdge>, NodeIndex) {
        let mut graph = DiGraph::new();
        let app = graph.add_node(package("app", "1.0.0", true));
        let a = graph.add_node(package("a", "1.1.0", false));
        let b = graph.add_node(package("b", "2.0.0", false));
        let c = graph.add_node(package("c", "3.0.0", false));

        graph.add_edge(app, a, DependencyEdge::new(DependencyKind::Production, false));
        graph.add_edge(app, b, DependencyEdge::new(DependencyKind::Development, false));
        graph.add_edge(a, c, DependencyEdge::new(DependencyKind::Development, true));
        graph.add_edge(b, c, DependencyEdge::new(DependencyKind::Production, false));

        (graph, app)
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut output = Vec::new();
        f(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_ascii_tree() {
        let (graph, root) = sample_graph();
        let renderer = GraphRenderer::new(false);

        let rendered = render(|out| renderer.render_ascii(&graph, Some(root), out));

        assert_eq!(
            rendered,
            "app@1.0.0\n\
             ├── a@1.1.0\n\
             │   └── c@3.0.0 [dev, optional]\n\
             └── b@2.0.0 [dev]\n\
            \u{20}   └── c@3.0.0 (deduped)\n"
        );
    }

    #[test]
    fn test_ascii_without_root() {
        let graph = DiGraph::new();
        let rendered = render(|out| GraphRenderer::new(false).render_ascii(&graph, None, out));
        assert_eq!(rendered, "No packages found to visualize\n");
    }

    #[test]
    fn test_mermaid_output() {
        let (graph, _) = sample_graph();
        let rendered = render(|out| GraphRenderer::new(false).render_mermaid(&graph, out));

        assert!(predicate::str::starts_with("graph TD").eval(&rendered));
        assert!(predicate::str::contains("n0[\"app@1.0.0\"]").eval(&rendered));
        assert!(predicate::str::contains("n0 --> n1").eval(&rendered));
        assert!(predicate::str::contains("n1 -.->|dev| n3").eval(&rendered));
        assert!(predicate::str::contains("style n0").eval(&rendered));
    }

    #[test]
    fn test_dot_output() {
        let (graph, _) = sample_graph();
        let rendered = render(|out| GraphRenderer::new(true).render_dot(&graph, out));

        assert!(predicate::str::contains("digraph package_dependencies").eval(&rendered));
        assert!(predicate::str::contains("(/app/node_modules/a)").eval(&rendered));
        assert!(
            predicate::str::contains(r#""n1" -> "n3" [label="dev""#).eval(&rendered)
        );
        assert!(predicate::str::contains("style=dashed").eval(&rendered));
        assert!(rendered.trim_end().ends_with('}'));
    }

    #[test]
    fn test_json_output() {
        let (graph, root) = sample_graph();
        let rendered =
            render(|out| GraphRenderer::new(false).render_json(&graph, Some(root), out));

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["root"], "app");
        assert_eq!(value["package_count"], 4);
        assert_eq!(value["edges"].as_array().unwrap().len(), 4);
        assert_eq!(value["edges"][1]["kind"], "development");
    }
}
