//! Extension traits for moment analysis on Polars DataFrames

use edu_core::Moments;

use crate::Result;

/// Extension trait computing descriptive moments of a DataFrame column
pub trait MomentsExt {
    /// Non-missing values of a numeric column as `f64`
    ///
    /// Nulls and NaNs are skipped. Integer columns are widened.
    ///
    /// # Errors
    /// `MissingColumn` if the column is absent, `TypeMismatch` if it is not
    /// numeric.
    fn numeric_sample(&self, column: &str) -> Result<Vec<f64>>;

    /// Compute mean, standard deviation, skewness and excess kurtosis
    ///
    /// # Errors
    /// As [`MomentsExt::numeric_sample`], plus `InsufficientData` when the
    /// column holds no usable value.
    fn moments(&self, column: &str) -> Result<Moments>;
}
