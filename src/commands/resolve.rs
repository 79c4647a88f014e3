//! Resolve command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ResolveConfig;
use crate::error::AppError;

impl FromCommand for ResolveConfig {
    fn from_command(command: Commands) -> Result<Self, AppError> {
        match command {
            Commands::Resolve { module, from } => {
                let from = match from {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                ResolveConfig::builder()
                    .with_module(module)
                    .with_from(from)
                    .build()
            }
            _ => Err(AppError::ConfigurationError {
                message: "Invalid command type for ResolveConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ResolveConfig);

/// Execute the resolve command for looking up one module
pub fn execute_resolve_command(command: Commands) -> Result<()> {
    let config = ResolveConfig::from_command(command)
        .wrap_err("Failed to parse resolve command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::resolve::ResolveExecutor;
    ResolveExecutor::execute(config)
}
