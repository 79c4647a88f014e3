//! # Manifest Analysis Module
//!
//! This module turns a parsed package.json into the list of dependencies a
//! graph node still has to expand.
//!
//! ## Key Components
//!
//! - **DependencyClassifier**: Applies the root / installed-package rules to
//!   the `dependencies`, `devDependencies` and `optionalDependencies`
//!   mappings
//! - **ClassificationRule**: One row of those rules
//!
//! ## Example
//!
//! ```
//! use std::path::Path;
//!
//! use npm_dep_graph::analyzer::DependencyClassifier;
//! use npm_dep_graph::manifest::PackageJson;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manifest = PackageJson::parse_str(
//!     r#"{"name": "app", "dependencies": {"a": "*"}, "devDependencies": {"b": "*"}}"#,
//!     Path::new("package.json"),
//! )?;
//!
//! let pending = DependencyClassifier::default().classify(&manifest, Path::new("."), true);
//!
//! let names: Vec<&str> = pending.iter().map(|d| d.name()).collect();
//! assert_eq!(names, ["a", "b"]);
//! assert!(pending.iter().all(|d| !d.is_optional()));
//! # Ok(())
//! # }
//! ```

mod dependency_classifier;

pub use dependency_classifier::{ClassificationRule, DependencyClassifier, Inclusion};
