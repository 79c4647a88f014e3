//! Configuration constants for npm-dep-graph
//!
//! This module contains the fixed names and defaults used throughout the
//! application.

use std::time::Duration;

/// Package manifest layout
pub mod manifest {
    /// File holding a package's metadata
    pub const MANIFEST_FILE: &str = "package.json";

    /// Directory packages are installed into
    pub const MODULES_DIR: &str = "node_modules";

    /// Shown in place of a missing `name`
    pub const UNNAMED_PACKAGE: &str = "(unnamed)";
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames while walking the package tree
    pub const SPINNER_FRAMES: &[&str] = &["📦 ", "📦·", "📦∙", "📦•", "📦●", "📦•", "📦∙", "📦·"];
}

/// Output formatting configuration
pub mod output {
    /// Default list format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph format when not specified
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

/// Logging configuration
pub mod logging {
    /// Filter used when neither `--verbose` nor `RUST_LOG` is given
    pub const DEFAULT_FILTER: &str = "warn";

    /// Filter used with `--verbose`
    pub const VERBOSE_FILTER: &str = "warn,npm_dep_graph=debug";
}
