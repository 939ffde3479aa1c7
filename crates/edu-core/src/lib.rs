//! Descriptive moments and distribution-shape classification
//!
//! This crate is the numeric core of edu-stats. It has no knowledge of
//! dataframes or files and works on plain `f64` samples:
//!
//! - [`Moments`] - mean, sample standard deviation, adjusted skewness and
//!   bias-corrected excess kurtosis
//! - [`Classification`] - skew direction and kurtosis type derived from the
//!   moments with fixed thresholds
//! - [`describe`] - the human-readable report
//!
//! # Example
//!
//! ```
//! use edu_core::{Classification, KurtType, Moments, SkewType};
//!
//! let moments = Moments::from_sample(&[1.0, 2.0, 3.0, 4.0, 10.0]).unwrap();
//! let shape = Classification::from_moments(&moments);
//!
//! assert_eq!(shape.skew_type, SkewType::RightSkewed);
//! assert_eq!(shape.kurt_type, KurtType::Leptokurtic);
//! ```

pub mod classify;
pub mod error;
pub mod moments;
pub mod report;

pub use classify::{classify, Classification, KurtType, SkewType, KURTOSIS_THRESHOLD, SKEW_THRESHOLD};
pub use error::{Error, Result};
pub use moments::Moments;
pub use report::{describe, fmt_stat};
