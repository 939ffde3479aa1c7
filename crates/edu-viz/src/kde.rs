//! Gaussian kernel density estimate for the violin plot
//!
//! The bandwidth follows Scott's rule, `h = σ · n^(-1/5)` with the sample
//! standard deviation. The evaluation grid extends `cut · h` beyond the
//! observed range on both sides so that the tails close smoothly.

use std::f64::consts::PI;

use edu_core::Moments;

/// Points at which the density is evaluated
pub const GRID_SIZE: usize = 100;

/// Bandwidths the support extends beyond the data
pub const CUT: f64 = 2.0;

/// Density evaluated on an evenly spaced support
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    /// Evaluation points, ascending
    pub support: Vec<f64>,
    /// Density at each support point
    pub density: Vec<f64>,
}

impl DensityCurve {
    pub fn max_density(&self) -> f64 {
        self.density.iter().copied().fold(0.0, f64::max)
    }

    /// Closed outline of a violin centred on `center`.
    ///
    /// Points are `(x, value)`. The widest point of the curve spans
    /// `center ± half_width`; the right half runs up the support and the
    /// left half runs back down.
    pub fn violin_outline(&self, center: f64, half_width: f64) -> Vec<(f64, f64)> {
        let peak = self.max_density();
        let scale = if peak > 0.0 { half_width / peak } else { 0.0 };

        let right = self
            .support
            .iter()
            .zip(&self.density)
            .map(|(&y, &d)| (center + d * scale, y));
        let left = self
            .support
            .iter()
            .zip(&self.density)
            .rev()
            .map(|(&y, &d)| (center - d * scale, y));
        right.chain(left).collect()
    }
}

/// Scott's rule bandwidth, `None` when the sample has no usable spread.
pub fn scott_bandwidth(sample: &[f64]) -> Option<f64> {
    let moments = Moments::from_sample(sample).ok()?;
    let h = moments.std_dev() * (sample.len() as f64).powf(-0.2);
    (h.is_finite() && h > 0.0).then_some(h)
}

/// Gaussian KDE of `sample` on `grid_size` points.
///
/// Returns `None` for samples a density cannot be fitted to: fewer than two
/// values, or all values equal.
pub fn gaussian_kde(sample: &[f64], grid_size: usize, cut: f64) -> Option<DensityCurve> {
    let h = scott_bandwidth(sample)?;
    let (lo, hi) = sample
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    let start = lo - cut * h;
    let end = hi + cut * h;
    let steps = grid_size.max(2) - 1;
    let step = (end - start) / steps as f64;

    let norm = 1.0 / (sample.len() as f64 * h * (2.0 * PI).sqrt());
    let support: Vec<f64> = (0..=steps).map(|i| start + i as f64 * step).collect();
    let density = support
        .iter()
        .map(|&y| {
            let sum: f64 = sample
                .iter()
                .map(|&x| {
                    let z = (y - x) / h;
                    (-0.5 * z * z).exp()
                })
                .sum();
            sum * norm
        })
        .collect();

    Some(DensityCurve { support, density })
}
