//! Dependency classification
//!
//! Decides which names of a manifest become pending dependencies of its
//! node, and whether they are required or optional. The rules differ
//! between the root project and installed packages:
//!
//! | mapping                | root                | installed package                   |
//! |------------------------|---------------------|-------------------------------------|
//! | `dependencies`         | required            | required                            |
//! | `devDependencies`      | required            | optional, kept only if resolvable   |
//! | `optionalDependencies` | not optional, kept only if resolvable | not optional, kept only if resolvable |

use std::collections::HashSet;
use std::path::Path;

use rayon::prelude::*;

use crate::core::{DependencyDescriptor, DependencyKind};
use crate::manifest::PackageJson;
use crate::module_resolver::ModuleResolver;

/// Whether a declared dependency is kept unconditionally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// Always kept; failing to resolve it later is fatal
    Required,
    /// Resolved during classification and dropped silently when missing
    IfResolvable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    pub kind: DependencyKind,
    pub optional: bool,
    pub inclusion: Inclusion,
}

const ROOT_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        kind: DependencyKind::Production,
        optional: false,
        inclusion: Inclusion::Required,
    },
    ClassificationRule {
        kind: DependencyKind::Development,
        optional: false,
        inclusion: Inclusion::Required,
    },
    ClassificationRule {
        kind: DependencyKind::Optional,
        optional: false,
        inclusion: Inclusion::IfResolvable,
    },
];

const PACKAGE_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        kind: DependencyKind::Production,
        optional: false,
        inclusion: Inclusion::Required,
    },
    ClassificationRule {
        kind: DependencyKind::Development,
        optional: true,
        inclusion: Inclusion::IfResolvable,
    },
    ClassificationRule {
        kind: DependencyKind::Optional,
        optional: false,
        inclusion: Inclusion::IfResolvable,
    },
];

/// Classifies the dependencies of a parsed package.json into pending
/// descriptors
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyClassifier {
    resolver: ModuleResolver,
}

impl DependencyClassifier {
    pub fn new(resolver: ModuleResolver) -> Self {
        Self { resolver }
    }

    /// The rules applied, in emission order
    pub fn rules(is_root: bool) -> &'static [ClassificationRule] {
        if is_root { ROOT_RULES } else { PACKAGE_RULES }
    }

    /// Produce the pending dependencies of the package in `module_dir`
    ///
    /// Output order is production, then development, then optional, each
    /// in manifest order. A name declared in several mappings is kept only
    /// at its first position. `IfResolvable` names are resolved here, in
    /// parallel, relative to `module_dir`.
    pub fn classify(
        &self,
        manifest: &PackageJson,
        module_dir: &Path,
        is_root: bool,
    ) -> Vec<DependencyDescriptor> {
        let mut seen = HashSet::new();
        let mut descriptors = Vec::new();

        for rule in Self::rules(is_root) {
            let names: Vec<&str> = manifest
                .dependency_names(rule.kind)
                .into_iter()
                .filter(|name| seen.insert(*name))
                .collect();

            match rule.inclusion {
                Inclusion::Required => descriptors.extend(
                    names
                        .into_iter()
                        .map(|name| DependencyDescriptor::new(name, rule.optional, rule.kind)),
                ),
                Inclusion::IfResolvable => {
                    descriptors.extend(self.keep_resolvable(names, module_dir, rule))
                }
            }
        }

        descriptors
    }

    fn keep_resolvable(
        &self,
        names: Vec<&str>,
        module_dir: &Path,
        rule: &ClassificationRule,
    ) -> Vec<DependencyDescriptor> {
        names
            .into_par_iter()
            .filter(|name| {
                self.resolver
                    .resolve_module_path(module_dir, name)
                    .is_ok()
            })
            .map(|name| DependencyDescriptor::new(name, rule.optional, rule.kind))
            .collect()
    }
}
