//! Lineup command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::LineupConfig;
use crate::error::AppError;

impl FromCommand for LineupConfig {
    fn from_command(command: Commands) -> Result<Self, AppError> {
        match command {
            Commands::Lineup { common, format } => LineupConfig::builder()
                .with_path(common.get_path())
                .with_format(format.format)
                .with_root_configuration(common.parse_root_configuration()?)
                .with_config_path(common.config_path)
                .build(),
            _ => Err(AppError::ConfigurationError {
                message: "Invalid command type for LineupConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LineupConfig);

/// Execute the lineup command for listing installed packages
pub fn execute_lineup_command(command: Commands) -> Result<()> {
    let config = LineupConfig::from_command(command)
        .wrap_err("Failed to parse lineup command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::lineup::LineupExecutor;
    LineupExecutor::execute(config)
}
