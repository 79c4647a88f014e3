//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::AppError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, AppError> {
        match command {
            Commands::Graph {
                common,
                format,
                output,
                show_paths,
            } => GraphOptions::builder()
                .with_path(common.get_path())
                .with_format(format)
                .with_output(output)
                .with_show_paths(show_paths)
                .with_root_configuration(common.parse_root_configuration()?)
                .with_config_path(common.config_path)
                .build(),
            _ => Err(AppError::ConfigurationError {
                message: "Invalid command type for GraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command for rendering the installed dependency graph
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let config = GraphOptions::from_command(command)
        .wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::GraphFormat;
    use crate::common::CommonArgs;

    #[test]
    fn test_from_graph_command() {
        let command = Commands::Graph {
            common: CommonArgs {
                path: Some(PathBuf::from("/work/app")),
                root_configuration: Some(r#"{"specVersion": "2.0"}"#.to_string()),
                config_path: Some(PathBuf::from("/work/app/ui5.yaml")),
            },
            format: GraphFormat::Dot,
            output: None,
            show_paths: true,
        };

        let options = GraphOptions::try_from(command).unwrap();

        assert_eq!(options.path, PathBuf::from("/work/app"));
        assert_eq!(options.format, GraphFormat::Dot);
        assert!(options.show_paths);
        assert_eq!(
            options.root_configuration,
            Some(serde_json::json!({"specVersion": "2.0"}))
        );
        assert_eq!(options.config_path, Some(PathBuf::from("/work/app/ui5.yaml")));
    }

    #[test]
    fn test_from_wrong_command() {
        let command = Commands::Resolve {
            module: "lodash".to_string(),
            from: None,
        };

        assert!(GraphOptions::from_command(command).is_err());
    }
}
