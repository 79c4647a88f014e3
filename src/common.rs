//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::error::AppError;

/// Common arguments shared by the graph-walking commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Directory to start searching for package.json from (defaults to
    /// current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Inline JSON configuration attached to the root package
    #[arg(long, value_name = "JSON", env = "NPM_DEP_GRAPH_ROOT_CONFIGURATION")]
    pub root_configuration: Option<String>,

    /// Configuration file path attached to the root package
    #[arg(long, value_name = "FILE", env = "NPM_DEP_GRAPH_CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "NPM_DEP_GRAPH_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl CommonArgs {
    /// Get the starting directory, using the current directory if none was
    /// provided
    pub fn get_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }

    /// Parse `--root-configuration` into a JSON value
    pub fn parse_root_configuration(&self) -> Result<Option<serde_json::Value>, AppError> {
        self.root_configuration
            .as_deref()
            .map(|raw| {
                serde_json::from_str(raw).map_err(|e| AppError::ConfigurationError {
                    message: format!("--root-configuration is not valid JSON: {e}"),
                })
            })
            .transpose()
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, AppError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, AppError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::AppError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Shorthand for the error every config builder returns on a missing field
pub(crate) fn missing_field(field: &str) -> AppError {
    AppError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn args(path: Option<PathBuf>, root_configuration: Option<&str>) -> CommonArgs {
        CommonArgs {
            path,
            root_configuration: root_configuration.map(str::to_string),
            config_path: None,
        }
    }

    #[test]
    fn test_get_path_defaults_to_current_dir() {
        let path = args(None, None).get_path();
        assert!(path.is_absolute() || path == std::path::Path::new("."));
    }

    #[test]
    fn test_get_path_with_value() {
        let path = args(Some(PathBuf::from("/tmp/project")), None).get_path();
        assert_eq!(path, PathBuf::from("/tmp/project"));
    }

    #[test]
    fn test_parse_root_configuration() {
        assert_eq!(args(None, None).parse_root_configuration().unwrap(), None);
        assert_eq!(
            args(None, Some(r#"{"type": "application"}"#))
                .parse_root_configuration()
                .unwrap(),
            Some(json!({"type": "application"}))
        );
    }

    #[test]
    fn test_parse_root_configuration_rejects_invalid_json() {
        let err = args(None, Some("{not json"))
            .parse_root_configuration()
            .unwrap_err();

        assert!(matches!(err, AppError::ConfigurationError { .. }));
    }
}
