use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid package.json syntax in '{file}'")]
#[diagnostic(
    code(npm_dep_graph::manifest_parse_error),
    help("Check the JSON syntax near the highlighted position")
)]
pub struct ManifestParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

/// Errors surfaced by the package graph provider
#[derive(Error, Debug, Diagnostic)]
pub enum ProviderError {
    #[error("Failed to locate package.json for directory {searched}")]
    #[diagnostic(
        code(npm_dep_graph::manifest_not_found),
        help("Run the command inside a package directory or one of its subdirectories")
    )]
    ManifestNotFound { searched: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParse(Box<ManifestParseError>),

    #[error("Unable to locate module {module} via resolve logic: {reason}")]
    #[diagnostic(
        code(npm_dep_graph::module_resolution_error),
        help("Make sure dependencies are installed (e.g. `npm install`) below or above this directory")
    )]
    ModuleResolution {
        module: String,
        base_dir: PathBuf,
        reason: String,
    },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(npm_dep_graph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(npm_dep_graph::config_error),
        help("Check the provider options")
    )]
    Configuration { message: String },
}

impl ProviderError {
    pub fn is_manifest_not_found(&self) -> bool {
        matches!(
            self,
            ProviderError::ManifestNotFound { .. } | ProviderError::ManifestParse(_)
        )
    }

    pub fn is_module_resolution(&self) -> bool {
        matches!(self, ProviderError::ModuleResolution { .. })
    }
}

/// Errors raised by the command layer around the provider
#[derive(Error, Debug, Diagnostic)]
pub enum AppError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Provider(#[from] ProviderError),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(npm_dep_graph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(npm_dep_graph::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(npm_dep_graph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(npm_dep_graph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
