//! # edu-viz
//!
//! Plots of a canonical education-rate table.
//!
//! The report has three fixed plots:
//!
//! - **relational**: formal education rate against year for every row
//! - **categorical**: the ten entities with the highest average rate
//! - **statistical**: violin densities for a fixed set of entities
//!
//! [`data`] prepares what each plot shows, [`kde`] fits the violin
//! densities, and a [`ReportVisualizer`] draws them. [`PngVisualizer`]
//! writes PNG files with plotters; [`NullVisualizer`] draws nothing.
//!
//! ```no_run
//! use edu_viz::{render_report, PngVisualizer};
//! # fn demo(df: &polars::prelude::DataFrame) -> edu_viz::Result<()> {
//! let mut viz = PngVisualizer::new("plots");
//! let written = render_report(&mut viz, df)?;
//! assert_eq!(written.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod data;
mod error;
pub mod kde;
mod png;
mod visualizer;

pub use data::{
    entity_samples, median, top_entities_by_mean, year_rate_points, EntityMean, EntitySample,
    PlotData, SAMPLE_ENTITIES, TOP_ENTITY_COUNT,
};
pub use error::{Error, Result};
pub use kde::{gaussian_kde, scott_bandwidth, DensityCurve};
pub use png::{PngVisualizer, CATEGORICAL_FILE, RELATIONAL_FILE, STATISTICAL_FILE};
pub use visualizer::{render_report, NullVisualizer, ReportVisualizer};
