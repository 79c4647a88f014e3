//! Resolve command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::ResolveConfig;
use crate::executors::CommandExecutor;
use crate::module_resolver::ModuleResolver;

pub struct ResolveExecutor;

impl CommandExecutor for ResolveExecutor {
    type Config = ResolveConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Resolving '{}' from {}...",
            style("🔍").cyan(),
            style(&config.module).bold(),
            config.from.display()
        );

        let module_path = ModuleResolver::new()
            .resolve_module_path(&config.from, &config.module)
            .wrap_err_with(|| format!("Failed to resolve '{}'", config.module))?;

        println!("{}", module_path.display());
        Ok(())
    }
}
