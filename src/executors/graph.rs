//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::GraphOptions;
use crate::executors::{CommandExecutor, walk_installed_packages};
use crate::graph::GraphRenderer;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} dependency graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let graph_builder = walk_installed_packages(
            &config.path,
            config.root_configuration,
            config.config_path,
        )?;

        let renderer = GraphRenderer::new(config.show_paths);

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        let graph = graph_builder.graph();
        match config.format {
            GraphFormat::Ascii => renderer
                .render_ascii(graph, graph_builder.root(), output_writer.as_mut())
                .wrap_err("Failed to render ASCII graph")?,
            GraphFormat::Mermaid => renderer
                .render_mermaid(graph, output_writer.as_mut())
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Dot => renderer
                .render_dot(graph, output_writer.as_mut())
                .wrap_err("Failed to render DOT graph")?,
            GraphFormat::Json => renderer
                .render_json(graph, graph_builder.root(), output_writer.as_mut())
                .wrap_err("Failed to render JSON graph")?,
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
