//! Polars integration for education-rate analysis
//!
//! This crate turns a raw CSV export into the canonical table the rest of
//! edu-stats works on, and computes descriptive moments over its columns.
//!
//! # Example
//!
//! ```rust,ignore
//! use edu_polars::{load_csv, preprocess, MomentsExt, EDUCATION_RATE};
//!
//! let raw = load_csv("data.csv".as_ref())?;
//! let canonical = preprocess(raw)?;
//! let moments = canonical.moments(EDUCATION_RATE)?;
//! ```

mod error;
mod io;
mod methods;
mod preprocess;
mod schema;
mod traits;

pub use error::{Error, Result};
pub use io::{load_csv, preview, PREVIEW_BANNER, PREVIEW_ROWS};
pub use preprocess::{drop_incomplete_rows, preprocess, rename_education_column};
pub use schema::{
    float_values, has_column, require_column, string_values, EDUCATION_RATE, ENTITY,
    REQUIRED_COLUMNS, SOURCE_RATE_COLUMN, YEAR,
};
pub use traits::*;
