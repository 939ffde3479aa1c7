use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use edu_stats::{run, AnalysisConfig};
use tracing_subscriber::EnvFilter;

/// Moments, shape classification and plots of formal-education rates
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with an analysis config; flags override its fields
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV file to analyse [default: data.csv]
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Column whose moments are reported [default: Education_Rate]
    #[arg(long, value_name = "NAME")]
    column: Option<String>,

    /// Directory the plot images are written to [default: .]
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Also print the report as JSON
    #[arg(long)]
    json: bool,

    /// Skip rendering the plot images
    #[arg(long)]
    no_plots: bool,
}

impl Cli {
    fn analysis_config(&self) -> anyhow::Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };
        if let Some(input) = &self.input {
            config = config.with_input_path(input);
        }
        if let Some(column) = &self.column {
            config = config.with_target_column(column);
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if self.no_plots {
            config = config.with_plots(false);
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = cli.analysis_config()?;
    let report = run(&config)
        .with_context(|| format!("analysis of {} failed", config.input_path.display()))?;

    if cli.json {
        println!("{}", report.to_json()?);
    }
    Ok(())
}
