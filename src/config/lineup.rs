//! Lineup command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct LineupConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub root_configuration: Option<serde_json::Value>,
    pub config_path: Option<PathBuf>,
}

impl LineupConfig {
    pub fn builder() -> LineupConfigBuilder {
        LineupConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct LineupConfigBuilder {
    path: Option<PathBuf>,
    format: Option<OutputFormat>,
    root_configuration: Option<serde_json::Value>,
    config_path: Option<PathBuf>,
}

impl LineupConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_root_configuration(mut self, configuration: Option<serde_json::Value>) -> Self {
        self.root_configuration = configuration;
        self
    }

    pub fn with_config_path(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }
}

impl crate::common::ConfigBuilder for LineupConfigBuilder {
    type Config = LineupConfig;

    fn build(self) -> Result<Self::Config, AppError> {
        Ok(LineupConfig {
            path: self.path.ok_or_else(|| missing_field("path"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            root_configuration: self.root_configuration,
            config_path: self.config_path,
        })
    }
}
