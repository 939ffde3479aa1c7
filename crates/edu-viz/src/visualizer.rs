//! Visualization interface for the education report
//!
//! The pipeline hands plot-ready data to a [`ReportVisualizer`] without
//! knowing how, or whether, it is drawn. [`PngVisualizer`](crate::PngVisualizer)
//! writes image files; [`NullVisualizer`] draws nothing.

use std::path::PathBuf;

use polars::prelude::DataFrame;
use tracing::debug;

use crate::data::{EntityMean, EntitySample, PlotData};
use crate::Result;

/// Receiver for the three report plots
///
/// Each method returns the path of the file it wrote, or `None` if the
/// visualizer produces no output.
pub trait ReportVisualizer {
    /// Scatter of rate against year for every row
    fn relational(&mut self, points: &[(f64, f64)]) -> Result<Option<PathBuf>>;

    /// Bars of the highest entity means, in the given order
    fn categorical(&mut self, means: &[EntityMean]) -> Result<Option<PathBuf>>;

    /// Density of each entity's rates
    fn statistical(&mut self, samples: &[EntitySample]) -> Result<Option<PathBuf>>;

    /// Check if this visualizer actually produces output
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Visualizer that draws nothing
#[derive(Default, Clone, Copy, Debug)]
pub struct NullVisualizer;

impl ReportVisualizer for NullVisualizer {
    #[inline(always)]
    fn relational(&mut self, _: &[(f64, f64)]) -> Result<Option<PathBuf>> {
        Ok(None)
    }

    #[inline(always)]
    fn categorical(&mut self, _: &[EntityMean]) -> Result<Option<PathBuf>> {
        Ok(None)
    }

    #[inline(always)]
    fn statistical(&mut self, _: &[EntitySample]) -> Result<Option<PathBuf>> {
        Ok(None)
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}

/// Prepare the plot data of a canonical table and pass it to `visualizer`.
///
/// Returns the paths written, in relational, categorical, statistical
/// order. A disabled visualizer skips data preparation entirely.
pub fn render_report<V: ReportVisualizer + ?Sized>(
    visualizer: &mut V,
    df: &DataFrame,
) -> Result<Vec<PathBuf>> {
    if !visualizer.is_enabled() {
        debug!("visualizer disabled, no plots rendered");
        return Ok(Vec::new());
    }

    let data = PlotData::from_frame(df)?;
    let written = [
        visualizer.relational(&data.points)?,
        visualizer.categorical(&data.top_entities)?,
        visualizer.statistical(&data.samples)?,
    ];
    Ok(written.into_iter().flatten().collect())
}
