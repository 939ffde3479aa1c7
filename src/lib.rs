//! # edu-stats
//!
//! Descriptive analysis of formal-education rates per entity and year.
//!
//! One run loads a CSV export, prints its first rows, drops incomplete
//! observations, computes the mean, standard deviation, skewness and excess
//! kurtosis of a column, classifies the distribution's shape, and renders
//! three plots.
//!
//! The work is split across the workspace crates:
//!
//! - [`edu_core`]: sample moments and shape classification
//! - [`edu_polars`]: CSV loading, cleaning and column analysis
//! - [`edu_viz`]: plot data and PNG rendering
//!
//! ```no_run
//! use edu_stats::{run, AnalysisConfig};
//!
//! let config = AnalysisConfig::default().with_output_dir("plots");
//! let report = run(&config)?;
//! println!("{}", report.to_json()?);
//! # Ok::<(), edu_stats::Error>(())
//! ```

mod config;
mod error;
mod pipeline;

pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use pipeline::{run, run_with, Report};

// Re-export workspace crates
pub use edu_core;
pub use edu_polars;
pub use edu_viz;
