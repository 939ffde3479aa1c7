//! Higher-order moments: mean, standard deviation, skewness and kurtosis
//!
//! All four statistics use the bias-corrected *sample* convention, which is
//! the one pandas applies in `Series.std`, `Series.skew` and `Series.kurt`.
//! The thresholds in [`crate::classify`] assume these estimators, not the
//! population variants that divide by `n`.
//!
//! | Statistic | Estimator | Defined for |
//! |-----------|-----------|-------------|
//! | Mean | `Σx / n` | n ≥ 1 |
//! | Std dev | `sqrt(Σ(x-x̄)² / (n-1))` | n ≥ 2 |
//! | Skewness | adjusted Fisher-Pearson `G1` | n ≥ 3 |
//! | Excess kurtosis | bias-corrected `G2` | n ≥ 4 |
//!
//! Below the minimum sample size a statistic is NaN rather than an error.
//!
//! # Zero variance
//!
//! When every observation is identical, skewness and excess kurtosis are
//! pinned to `0.0` (for samples large enough for the statistic to exist).
//! Central-moment sums smaller than `1e-14` in magnitude are treated as exact
//! zeros before this check.

use crate::{Error, Result};
use serde::Serialize;

/// Central-moment sums below this magnitude are floating-point residue.
const FP_ZERO: f64 = 1e-14;

/// The four descriptive moments of a sample.
///
/// Created once per analysis and never mutated; use the accessors or
/// [`Moments::as_tuple`] to read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Moments {
    mean: f64,
    std_dev: f64,
    skewness: f64,
    excess_kurtosis: f64,
}

impl Moments {
    /// Compute the moments of a sample.
    ///
    /// Fails with [`Error::InsufficientData`] on an empty slice. NaN values
    /// are not filtered; callers that read from nullable columns are expected
    /// to drop missing values first.
    ///
    /// ```
    /// use edu_core::Moments;
    ///
    /// let m = Moments::from_sample(&[1.0, 2.0, 3.0, 4.0, 10.0]).unwrap();
    /// assert_eq!(m.mean(), 4.0);
    /// assert!((m.skewness() - 1.697056).abs() < 1e-6);
    /// ```
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::empty_input());
        }

        // Offsets from the first value keep the mean of a constant sample exact
        let n = sample.len() as f64;
        let pivot = sample[0];
        let mean = pivot + sample.iter().map(|&x| x - pivot).sum::<f64>() / n;
        let sums = CentralSums::new(sample, mean);

        let moments = Self {
            mean,
            std_dev: sample_std_dev(sample.len(), sums.s2),
            skewness: sample_skewness(sample.len(), sums.s2, sums.s3),
            excess_kurtosis: sample_excess_kurtosis(sample.len(), sums.s2, sums.s4),
        };
        tracing::debug!(n = sample.len(), ?moments, "computed sample moments");
        Ok(moments)
    }

    /// Build from already computed values.
    pub fn new(mean: f64, std_dev: f64, skewness: f64, excess_kurtosis: f64) -> Self {
        Self {
            mean,
            std_dev,
            skewness,
            excess_kurtosis,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation (`n - 1` denominator).
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Adjusted Fisher-Pearson skewness.
    pub fn skewness(&self) -> f64 {
        self.skewness
    }

    /// Bias-corrected excess kurtosis (0 for a normal distribution).
    pub fn excess_kurtosis(&self) -> f64 {
        self.excess_kurtosis
    }

    /// `(mean, std_dev, skewness, excess_kurtosis)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.mean, self.std_dev, self.skewness, self.excess_kurtosis)
    }
}

/// Sums of powers of deviations from the mean.
struct CentralSums {
    s2: f64,
    s3: f64,
    s4: f64,
}

impl CentralSums {
    fn new(sample: &[f64], mean: f64) -> Self {
        sample.iter().fold(
            Self {
                s2: 0.0,
                s3: 0.0,
                s4: 0.0,
            },
            |acc, &x| {
                let d = x - mean;
                let d2 = d * d;
                Self {
                    s2: acc.s2 + d2,
                    s3: acc.s3 + d2 * d,
                    s4: acc.s4 + d2 * d2,
                }
            },
        )
    }
}

fn zero_out_fp_error(value: f64) -> f64 {
    if value.abs() < FP_ZERO {
        0.0
    } else {
        value
    }
}

/// Sample standard deviation, NaN for fewer than two observations.
fn sample_std_dev(n: usize, s2: f64) -> f64 {
    if n < 2 {
        return f64::NAN;
    }
    (s2 / (n - 1) as f64).sqrt()
}

/// Adjusted Fisher-Pearson standardized moment coefficient
///
/// `G1 = n * sqrt(n - 1) / (n - 2) * S3 / S2^1.5`, which equals
/// `sqrt(n(n-1)) / (n-2) * m3 / m2^1.5` with `mk = Sk / n`.
fn sample_skewness(n: usize, s2: f64, s3: f64) -> f64 {
    if n < 3 {
        return f64::NAN;
    }
    let s2 = zero_out_fp_error(s2);
    let s3 = zero_out_fp_error(s3);
    if s2 == 0.0 {
        return 0.0;
    }

    let n = n as f64;
    (n * (n - 1.0).sqrt() / (n - 2.0)) * (s3 / s2.powf(1.5))
}

/// Bias-corrected excess kurtosis
///
/// `G2 = (n+1) n (n-1) S4 / ((n-2)(n-3) S2²) - 3 (n-1)² / ((n-2)(n-3))`
fn sample_excess_kurtosis(n: usize, s2: f64, s4: f64) -> f64 {
    if n < 4 {
        return f64::NAN;
    }

    let n = n as f64;
    let adjustment = 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0));
    let numerator = zero_out_fp_error(n * (n + 1.0) * (n - 1.0) * s4);
    let denominator = zero_out_fp_error((n - 2.0) * (n - 3.0) * s2 * s2);
    if denominator == 0.0 {
        return 0.0;
    }

    numerator / denominator - adjustment
}
