//! The end-to-end report: load, preview, clean, analyse, plot, describe

use std::io::{self, Write};
use std::path::PathBuf;

use edu_core::{describe, Classification, Moments};
use edu_polars::{
    load_csv, preprocess, preview, rename_education_column, MomentsExt, PREVIEW_ROWS,
};
use edu_viz::{render_report, NullVisualizer, PngVisualizer, ReportVisualizer};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{AnalysisConfig, Result};

/// Outcome of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Analysed column
    pub column: String,
    /// Rows left after cleaning
    pub rows: usize,
    pub moments: Moments,
    #[serde(flatten)]
    pub classification: Classification,
    /// Plot files written, empty when plotting is disabled
    #[serde(skip)]
    pub plots: Vec<PathBuf>,
}

impl Report {
    /// The human-readable interpretation printed at the end of a run
    pub fn describe(&self) -> String {
        describe(&self.moments, &self.column)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the analysis, printing to stdout and writing plots as configured.
pub fn run(config: &AnalysisConfig) -> Result<Report> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.plots {
        let mut visualizer = PngVisualizer::new(&config.output_dir);
        run_with(config, &mut out, &mut visualizer)
    } else {
        run_with(config, &mut out, &mut NullVisualizer)
    }
}

/// Run the analysis with an explicit console and visualizer.
///
/// Writes a preview of the loaded table with its rate column renamed, then
/// the interpretation after a blank line. The target column is analysed before any plot is drawn, so a table
/// left empty by cleaning fails without producing images.
#[instrument(skip(config, out, visualizer), fields(input = %config.input_path.display()))]
pub fn run_with<W, V>(config: &AnalysisConfig, out: &mut W, visualizer: &mut V) -> Result<Report>
where
    W: Write,
    V: ReportVisualizer + ?Sized,
{
    let renamed = rename_education_column(load_csv(&config.input_path)?)?;
    writeln!(out, "{}", preview(&renamed, PREVIEW_ROWS))?;

    let df = preprocess(renamed)?;
    let moments = df.moments(&config.target_column)?;
    debug!(
        mean = moments.mean(),
        std_dev = moments.std_dev(),
        skewness = moments.skewness(),
        excess_kurtosis = moments.excess_kurtosis(),
        "computed moments"
    );

    let plots = render_report(visualizer, &df)?;
    info!(count = plots.len(), "rendered plots");

    let report = Report {
        column: config.target_column.clone(),
        rows: df.height(),
        moments,
        classification: Classification::from_moments(&moments),
        plots,
    };
    writeln!(out)?;
    writeln!(out, "{}", report.describe())?;
    Ok(report)
}
