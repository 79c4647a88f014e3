//! Report generation modules for different output formats
//!
//! This module contains report generators for the `lineup` command:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use petgraph::Direction;
use petgraph::graph::NodeIndex;

use crate::core::DependencyKind;
use crate::error::AppError;
use crate::graph::{DependencyGraphBuilder, PackageNode};

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a walked package graph
    fn generate_report(&self, graph: &DependencyGraphBuilder) -> Result<String, AppError>;
}

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;

/// How a package was reached from the rest of the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Reachability {
    /// Reached through at least one non-optional edge
    pub required: bool,
    /// Reached only through development edges
    pub dev_only: bool,
}

/// Packages sorted by name then path, with how each one was reached
pub(crate) fn lineup(graph: &DependencyGraphBuilder) -> Vec<(&PackageNode, Reachability)> {
    let g = graph.graph();
    let mut entries: Vec<(&PackageNode, Reachability)> = g
        .node_indices()
        .map(|idx| (&g[idx], reachability(graph, idx)))
        .collect();

    entries.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
    entries
}

fn reachability(graph: &DependencyGraphBuilder, idx: NodeIndex) -> Reachability {
    if graph.root() == Some(idx) {
        return Reachability {
            required: true,
            dev_only: false,
        };
    }

    let incoming: Vec<_> = graph
        .graph()
        .edges_directed(idx, Direction::Incoming)
        .map(|edge| *edge.weight())
        .collect();

    Reachability {
        required: incoming.iter().any(|edge| !edge.is_optional()),
        dev_only: !incoming.is_empty()
            && incoming
                .iter()
                .all(|edge| edge.kind() == DependencyKind::Development),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use predicates::prelude::*;

    use super::*;
    use crate::core::{DependencyDescriptor, GraphNode};
    use crate::error::ProviderError;
    use crate::provider::GraphProvider;

    /// Serves a fixed set of packages keyed by name
    struct InMemoryProvider {
        packages: HashMap<&'static str, Vec<DependencyDescriptor>>,
    }

    impl InMemoryProvider {
        fn node(&self, name: &str, optional: bool) -> GraphNode {
            GraphNode {
                id: Some(name.to_string()),
                version: Some("1.0.0".to_string()),
                path: PathBuf::from("/work/node_modules").join(name),
                optional,
                configuration: None,
                config_path: None,
                pending_dependencies: self.packages.get(name).cloned().unwrap_or_default(),
            }
        }
    }

    impl GraphProvider for InMemoryProvider {
        fn get_root_node(&self) -> Result<GraphNode, ProviderError> {
            Ok(self.node("app", false))
        }

        fn expand(&self, node: &GraphNode) -> Result<Vec<GraphNode>, ProviderError> {
            Ok(node
                .pending_dependencies()
                .iter()
                .map(|dep| self.node(dep.name(), dep.optional))
                .collect())
        }
    }

    fn walked() -> DependencyGraphBuilder {
        let provider = InMemoryProvider {
            packages: HashMap::from([
                (
                    "app",
                    vec![
                        DependencyDescriptor::new("react", false, DependencyKind::Production),
                        DependencyDescriptor::new("jest", false, DependencyKind::Development),
                    ],
                ),
                (
                    "react",
                    vec![DependencyDescriptor::new(
                        "fsevents",
                        false,
                        DependencyKind::Optional,
                    )],
                ),
                (
                    "jest",
                    vec![DependencyDescriptor::new(
                        "fsevents",
                        true,
                        DependencyKind::Development,
                    )],
                ),
            ]),
        };

        let mut builder = DependencyGraphBuilder::new();
        builder.build(&provider, None).unwrap();
        builder
    }

    #[test]
    fn test_lineup_is_sorted_with_reachability() {
        let builder = walked();
        let entries = lineup(&builder);

        let names: Vec<_> = entries.iter().map(|(p, _)| p.label()).collect();
        assert_eq!(
            names,
            vec!["app@1.0.0", "fsevents@1.0.0", "jest@1.0.0", "react@1.0.0"]
        );

        let jest = entries.iter().find(|(p, _)| p.name() == Some("jest")).unwrap().1;
        assert_eq!(
            jest,
            Reachability {
                required: true,
                dev_only: true
            }
        );

        // fsevents is only reachable through optional edges
        let fsevents = entries.iter().find(|(p, _)| p.name() == Some("fsevents")).unwrap().1;
        assert!(!fsevents.required);
        assert!(!fsevents.dev_only);
    }

    #[test]
    fn test_human_report() {
        let report = HumanReportGenerator::new()
            .generate_report(&walked())
            .unwrap();

        assert!(predicate::str::contains("4 installed packages").eval(&report));
        assert!(predicate::str::contains("react@1.0.0").eval(&report));
        assert!(predicate::str::contains("/work/node_modules/jest").eval(&report));
        assert!(predicate::str::contains("optional").eval(&report));
    }

    #[test]
    fn test_json_report() {
        let report = JsonReportGenerator::new()
            .generate_report(&walked())
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["package_count"], 4);
        assert_eq!(json["packages"][0]["name"], "app");
        assert_eq!(json["packages"][0]["root"], true);
        assert_eq!(json["packages"][1]["name"], "fsevents");
        assert_eq!(json["packages"][1]["optional"], true);
        assert_eq!(json["packages"][2]["dev_only"], true);
    }
}
