//! Benchmark chart renderer
//!
//! Writes the four copy-strategy benchmark charts to the output directory
//! (the working directory unless `--output-dir` is given) and prints the
//! list of generated files.

use anyhow::Context;
use clap::Parser;
use colored::*;
use copybench_plots::{BenchmarkDataset, ChartRenderer, RenderConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "render_plots")]
#[command(about = "Render two-copy / one-copy / zero-copy benchmark charts")]
#[command(version)]
struct Cli {
    /// Directory the PNG files are written to
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Vec<String>> {
    let config = RenderConfig::publication().with_output_dir(&cli.output_dir);
    let renderer = ChartRenderer::new(BenchmarkDataset::reference(), config);
    let report = renderer
        .render_all()
        .with_context(|| format!("rendering charts into {}", cli.output_dir.display()))?;
    Ok(report.confirmation_lines())
}
