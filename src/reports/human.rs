//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ReportGenerator, lineup};
use crate::error::AppError;
use crate::graph::DependencyGraphBuilder;
use crate::utils::string::count_of;

#[derive(Default)]
pub struct HumanReportGenerator;

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, graph: &DependencyGraphBuilder) -> Result<String, AppError> {
        let mut output = String::new();
        let entries = lineup(graph);

        if entries.is_empty() {
            write!(output, "\n{} No packages found\n", style("ℹ").blue())?;
            return Ok(output);
        }

        writeln!(
            output,
            "\n{} {}:\n",
            style("📦").blue(),
            style(count_of("installed package", entries.len())).bold()
        )?;

        for (package, reach) in entries {
            let mut markers = Vec::new();
            if package.is_root {
                markers.push("root");
            }
            if !reach.required {
                markers.push("optional");
            }
            if reach.dev_only {
                markers.push("dev");
            }

            let marker = if markers.is_empty() {
                String::new()
            } else {
                format!(" ({})", markers.join(", "))
            };

            writeln!(
                output,
                "  {} {}{}",
                style("•").dim(),
                style(package.label()).bold(),
                style(marker).yellow()
            )?;
            writeln!(
                output,
                "      {} {}",
                style("📍").dim(),
                package.path().display()
            )?;
        }

        Ok(output)
    }
}
