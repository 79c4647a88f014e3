//! Resolve command configuration

use std::path::PathBuf;

use crate::common::missing_field;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct ResolveConfig {
    pub module: String,
    pub from: PathBuf,
}

impl ResolveConfig {
    pub fn builder() -> ResolveConfigBuilder {
        ResolveConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ResolveConfigBuilder {
    module: Option<String>,
    from: Option<PathBuf>,
}

impl ResolveConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_from(mut self, from: PathBuf) -> Self {
        self.from = Some(from);
        self
    }
}

impl crate::common::ConfigBuilder for ResolveConfigBuilder {
    type Config = ResolveConfig;

    fn build(self) -> Result<Self::Config, AppError> {
        let module = self.module.ok_or_else(|| missing_field("module"))?;
        if module.trim().is_empty() {
            return Err(AppError::ConfigurationError {
                message: "Module name must not be empty".to_string(),
            });
        }

        Ok(ResolveConfig {
            module,
            from: self.from.ok_or_else(|| missing_field("from"))?,
        })
    }
}
