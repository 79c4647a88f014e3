//! Core graph types
//!
//! This module contains the node and edge weights stored in the walked
//! package graph.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::manifest::UNNAMED_PACKAGE;
use crate::core::{DependencyKind, GraphNode};

/// One distinct installed package in the walked graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageNode {
    pub name: Option<String>,
    pub version: Option<String>,
    pub path: PathBuf,
    pub optional: bool,
    pub is_root: bool,
}

impl PackageNode {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `name@version`, or just the name for unversioned packages
    pub fn label(&self) -> String {
        let name = self.name().unwrap_or(UNNAMED_PACKAGE);
        match &self.version {
            Some(version) => format!("{name}@{version}"),
            None => name.to_string(),
        }
    }

    pub fn from_graph_node(node: &GraphNode, is_root: bool) -> Self {
        Self {
            name: node.id.clone(),
            version: node.version.clone(),
            path: node.path.clone(),
            optional: node.optional,
            is_root,
        }
    }
}

/// A parent to child relation between packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DependencyEdge {
    pub kind: DependencyKind,
    pub optional: bool,
}

impl DependencyEdge {
    pub fn new(kind: DependencyKind, optional: bool) -> Self {
        Self { kind, optional }
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    /// The child may be absent without breaking the parent: a best-effort
    /// dev edge or any `optionalDependencies` edge
    pub fn is_optional(&self) -> bool {
        self.optional || self.kind == DependencyKind::Optional
    }
}
