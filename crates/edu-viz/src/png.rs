//! PNG rendering of the report plots with plotters

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use tracing::info;

use crate::data::{median, EntityMean, EntitySample};
use crate::kde::{gaussian_kde, CUT, GRID_SIZE};
use crate::visualizer::ReportVisualizer;
use crate::{Error, Result};

pub const RELATIONAL_FILE: &str = "relational_plot.png";
pub const CATEGORICAL_FILE: &str = "categorical_plot.png";
pub const STATISTICAL_FILE: &str = "statistical_plot.png";

const RELATIONAL_SIZE: (u32, u32) = (800, 600);
const CATEGORICAL_SIZE: (u32, u32) = (1200, 600);
const STATISTICAL_SIZE: (u32, u32) = (1000, 600);

const RELATIONAL_TITLE: &str = "Global Education Progress: Formal Education Over Time";
const CATEGORICAL_TITLE: &str = "Top 10 Entities by Average Formal Education Rate";
const STATISTICAL_TITLE: &str = "Statistical Density of Education Rates by Entity";

const RATE_LABEL: &str = "Formal Education Rate (%)";
const FONT: &str = "sans-serif";

/// Scatter point opacity
const POINT_ALPHA: f64 = 0.4;

/// Half the width of the widest violin, in category units
const VIOLIN_HALF_WIDTH: f64 = 0.4;

/// Writes each plot as a PNG file into one directory
#[derive(Debug, Clone)]
pub struct PngVisualizer {
    output_dir: PathBuf,
}

impl PngVisualizer {
    /// Create a visualizer writing into `output_dir`.
    ///
    /// The directory is created when the first plot is written, so a run
    /// that fails before plotting leaves nothing behind.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Path for `file_name`, creating the output directory if missing.
    fn prepare(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(self.path_for(file_name))
    }
}

impl ReportVisualizer for PngVisualizer {
    fn relational(&mut self, points: &[(f64, f64)]) -> Result<Option<PathBuf>> {
        let path = self.prepare(RELATIONAL_FILE)?;
        draw_relational(&path, points)?;
        info!(path = %path.display(), points = points.len(), "wrote relational plot");
        Ok(Some(path))
    }

    fn categorical(&mut self, means: &[EntityMean]) -> Result<Option<PathBuf>> {
        let path = self.prepare(CATEGORICAL_FILE)?;
        draw_categorical(&path, means)?;
        info!(path = %path.display(), bars = means.len(), "wrote categorical plot");
        Ok(Some(path))
    }

    fn statistical(&mut self, samples: &[EntitySample]) -> Result<Option<PathBuf>> {
        let path = self.prepare(STATISTICAL_FILE)?;
        draw_statistical(&path, samples)?;
        info!(path = %path.display(), violins = samples.len(), "wrote statistical plot");
        Ok(Some(path))
    }
}

fn draw_relational(path: &Path, points: &[(f64, f64)]) -> Result<()> {
    let root = BitMapBackend::new(path, RELATIONAL_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(Error::plot)?;

    let x_range = padded_range(points.iter().map(|p| p.0), 0.02);
    let y_range = padded_range(points.iter().map(|p| p.1), 0.05);

    let mut chart = ChartBuilder::on(&root)
        .caption(RELATIONAL_TITLE, (FONT, 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(Error::plot)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc(RATE_LABEL)
        .x_label_formatter(&|year| format!("{year:.0}"))
        .draw()
        .map_err(Error::plot)?;

    let style = BLUE.mix(POINT_ALPHA).filled();
    chart
        .draw_series(points.iter().map(|&point| Circle::new(point, 3, style)))
        .map_err(Error::plot)?;

    root.present().map_err(Error::plot)?;
    Ok(())
}

fn draw_categorical(path: &Path, means: &[EntityMean]) -> Result<()> {
    let root = BitMapBackend::new(path, CATEGORICAL_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(Error::plot)?;

    let bars = means.len().max(1) as i32;
    let top = means.iter().map(|m| m.mean).fold(0.0, f64::max);
    let y_max = if top > 0.0 { top * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(CATEGORICAL_TITLE, (FONT, 22))
        .margin(15)
        .x_label_area_size(140)
        .y_label_area_size(60)
        .build_cartesian_2d((0..bars).into_segmented(), 0.0..y_max)
        .map_err(Error::plot)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(means.len().max(1))
        .x_label_style((FONT, 14).into_font().transform(FontTransform::Rotate90))
        .x_desc("Entity (Country)")
        .y_desc("Average Education Rate (%)")
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) => usize::try_from(*i)
                .ok()
                .and_then(|i| means.get(i))
                .map(|m| m.entity.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(Error::plot)?;

    chart
        .draw_series(means.iter().enumerate().map(|(i, m)| {
            let i = i as i32;
            let color = viridis(i as usize, means.len());
            Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), m.mean)],
                color.filled(),
            )
        }))
        .map_err(Error::plot)?;

    root.present().map_err(Error::plot)?;
    Ok(())
}

fn draw_statistical(path: &Path, samples: &[EntitySample]) -> Result<()> {
    let root = BitMapBackend::new(path, STATISTICAL_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(Error::plot)?;

    let outlines: Vec<Option<Vec<(f64, f64)>>> = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            gaussian_kde(&sample.values, GRID_SIZE, CUT)
                .map(|curve| curve.violin_outline(i as f64, VIOLIN_HALF_WIDTH))
        })
        .collect();

    let slots = samples.len().max(1);
    let x_range = -0.5..slots as f64 - 0.5;
    let y_range = padded_range(
        outlines
            .iter()
            .flatten()
            .flatten()
            .map(|p| p.1)
            .chain(samples.iter().flat_map(|s| s.values.iter().copied())),
        0.05,
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(STATISTICAL_TITLE, (FONT, 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(Error::plot)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_desc("Entity")
        .y_desc(RATE_LABEL)
        .x_label_formatter(&|x| {
            // Only whole positions are violin centers
            let slot = x.round();
            if slot < 0.0 || (x - slot).abs() > 1e-6 {
                return String::new();
            }
            samples
                .get(slot as usize)
                .map(|s| s.entity.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(Error::plot)?;

    for (i, (sample, outline)) in samples.iter().zip(&outlines).enumerate() {
        let color = Palette99::pick(i);
        if let Some(outline) = outline {
            chart
                .draw_series(std::iter::once(Polygon::new(
                    outline.clone(),
                    color.mix(0.6).filled(),
                )))
                .map_err(Error::plot)?;
            let mut border = outline.clone();
            border.extend(outline.first().copied());
            chart
                .draw_series(std::iter::once(PathElement::new(border, BLACK)))
                .map_err(Error::plot)?;
        }
        if let Some(mid) = median(&sample.values) {
            let center = i as f64;
            chart
                .draw_series([
                    PathElement::new(
                        vec![
                            (center - VIOLIN_HALF_WIDTH / 4.0, mid),
                            (center + VIOLIN_HALF_WIDTH / 4.0, mid),
                        ],
                        BLACK.stroke_width(2),
                    )
                    .into_dyn(),
                    Circle::new((center, mid), 4, WHITE.filled()).into_dyn(),
                ])
                .map_err(Error::plot)?;
        }
    }

    root.present().map_err(Error::plot)?;
    Ok(())
}

/// Color `i` of `n` evenly spaced along the viridis map.
fn viridis(i: usize, n: usize) -> RGBColor {
    let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
    ColorMap::<RGBColor, f64>::get_color_normalized(&ViridisRGB {}, t, 0.0, 1.0)
}

/// Range covering `values` with `pad` of its span added on each side.
///
/// An empty input gives `0..1`; a single distinct value is widened by one
/// unit in each direction.
pub(crate) fn padded_range(values: impl IntoIterator<Item = f64>, pad: f64) -> Range<f64> {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return 0.0..1.0;
    }
    let span = hi - lo;
    if span == 0.0 {
        return lo - 1.0..hi + 1.0;
    }
    lo - span * pad..hi + span * pad
}
