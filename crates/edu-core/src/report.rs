//! Human-readable interpretation of a moment analysis

use crate::{Classification, Moments};

/// Format a statistic with two decimals, spelling NaN as `nan`.
pub fn fmt_stat(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Render the moments of `column` and their shape classification.
///
/// ```
/// use edu_core::{describe, Moments};
///
/// let text = describe(&Moments::new(50.0, 0.0, 0.0, f64::NAN), "Education_Rate");
/// assert!(text.contains("Excess Kurtosis = nan."));
/// assert!(text.ends_with("The data was not skewed and mesokurtic."));
/// ```
pub fn describe(moments: &Moments, column: &str) -> String {
    let Classification {
        skew_type,
        kurt_type,
    } = Classification::from_moments(moments);

    format!(
        "For the attribute {column}:\n\
         Mean = {}, Standard Deviation = {}, Skewness = {}, and Excess Kurtosis = {}.\n\
         The data was {skew_type} and {kurt_type}.",
        fmt_stat(moments.mean()),
        fmt_stat(moments.std_dev()),
        fmt_stat(moments.skewness()),
        fmt_stat(moments.excess_kurtosis()),
    )
}
