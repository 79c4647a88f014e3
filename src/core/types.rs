//! Core type definitions
//!
//! This module contains the basic data structures handed between the
//! provider and the graph engine, with minimal logic - focusing on data
//! representation.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::manifest::UNNAMED_PACKAGE;

/// Which manifest mapping a dependency was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Production,
    Development,
    Optional,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyKind::Production => write!(f, "prod"),
            DependencyKind::Development => write!(f, "dev"),
            DependencyKind::Optional => write!(f, "optional"),
        }
    }
}

/// A dependency name still waiting to be expanded into a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyDescriptor {
    pub name: String,
    pub optional: bool,
    pub kind: DependencyKind,
}

impl DependencyDescriptor {
    pub fn new(name: impl Into<String>, optional: bool, kind: DependencyKind) -> Self {
        Self {
            name: name.into(),
            optional,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// One installed package instance in the project graph
///
/// `path` is always a canonical directory, so two nodes with the same
/// `path` describe the same package on disk. `id` is the manifest's `name`
/// and is absent for packages that declare none.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: Option<String>,
    pub version: Option<String>,
    pub path: PathBuf,
    pub optional: bool,
    pub configuration: Option<serde_json::Value>,
    pub config_path: Option<PathBuf>,
    pub pending_dependencies: Vec<DependencyDescriptor>,
}

impl GraphNode {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The id, or a placeholder for nameless packages
    pub fn display_id(&self) -> &str {
        self.id().unwrap_or(UNNAMED_PACKAGE)
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn pending_dependencies(&self) -> &[DependencyDescriptor] {
        &self.pending_dependencies
    }

    pub fn has_pending_dependencies(&self) -> bool {
        !self.pending_dependencies.is_empty()
    }
}
