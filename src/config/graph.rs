//! Graph command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::missing_field;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub path: PathBuf,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub show_paths: bool,
    pub root_configuration: Option<serde_json::Value>,
    pub config_path: Option<PathBuf>,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    path: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    show_paths: Option<bool>,
    root_configuration: Option<serde_json::Value>,
    config_path: Option<PathBuf>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_show_paths(mut self, show_paths: bool) -> Self {
        self.show_paths = Some(show_paths);
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

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, AppError> {
        Ok(GraphOptions {
            path: self.path.ok_or_else(|| missing_field("path"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            show_paths: self.show_paths.ok_or_else(|| missing_field("show_paths"))?,
            root_configuration: self.root_configuration,
            config_path: self.config_path,
        })
    }
}
