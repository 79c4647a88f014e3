//! JSON format report generation

use serde::Serialize;

use super::{ReportGenerator, lineup};
use crate::error::AppError;
use crate::graph::DependencyGraphBuilder;

/// JSON output structure for the package lineup
#[derive(Debug, Serialize)]
pub struct LineupJsonReport {
    pub package_count: usize,
    pub packages: Vec<LineupEntry>,
}

#[derive(Debug, Serialize)]
pub struct LineupEntry {
    pub name: Option<String>,
    pub version: Option<String>,
    pub path: String,
    pub root: bool,
    pub optional: bool,
    pub dev_only: bool,
}

#[derive(Default)]
pub struct JsonReportGenerator;

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, graph: &DependencyGraphBuilder) -> Result<String, AppError> {
        let packages: Vec<LineupEntry> = lineup(graph)
            .into_iter()
            .map(|(package, reach)| LineupEntry {
                name: package.name.clone(),
                version: package.version.clone(),
                path: package.path().display().to_string(),
                root: package.is_root,
                optional: !reach.required,
                dev_only: reach.dev_only,
            })
            .collect();

        let report = LineupJsonReport {
            package_count: packages.len(),
            packages,
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}
