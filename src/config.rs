//! Configuration of one analysis run

use std::fs;
use std::path::{Path, PathBuf};

use edu_polars::EDUCATION_RATE;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Input file, analysed column and plot destination
///
/// Missing fields in a JSON config take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// CSV file to analyse
    pub input_path: PathBuf,
    /// Column whose moments are reported
    pub target_column: String,
    /// Directory the plot images are written to
    pub output_dir: PathBuf,
    /// Whether plot images are rendered at all
    pub plots: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data.csv"),
            target_column: EDUCATION_RATE.to_string(),
            output_dir: PathBuf::from("."),
            plots: true,
        }
    }
}

impl AnalysisConfig {
    /// Read a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = column.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_plots(mut self, plots: bool) -> Self {
        self.plots = plots;
        self
    }
}
