//! Lineup command executor

use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::LineupConfig;
use crate::executors::{CommandExecutor, walk_installed_packages};
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct LineupExecutor;

impl CommandExecutor for LineupExecutor {
    type Config = LineupConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let graph_builder = walk_installed_packages(
            &config.path,
            config.root_configuration,
            config.config_path,
        )?;

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&graph_builder),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&graph_builder),
        }
        .wrap_err("Failed to generate package lineup report")?;

        println!("{report}");
        Ok(())
    }
}
