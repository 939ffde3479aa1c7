//! Normalization of the raw education table into its canonical shape
//!
//! Preprocessing is two independent steps:
//!
//! 1. [`rename_education_column`] - give the long published rate column its
//!    canonical name [`EDUCATION_RATE`]
//! 2. [`drop_incomplete_rows`] - remove rows missing any of
//!    [`REQUIRED_COLUMNS`]
//!
//! [`preprocess`] composes them. Applying it to an already canonical table
//! returns the table unchanged.

use polars::prelude::*;
use tracing::{debug, instrument};

use crate::schema::{has_column, require_column, EDUCATION_RATE, REQUIRED_COLUMNS, SOURCE_RATE_COLUMN};
use crate::{Error, Result};

/// Rename [`SOURCE_RATE_COLUMN`] to [`EDUCATION_RATE`].
///
/// A table that already carries [`EDUCATION_RATE`] and not the source name
/// is returned as is. A table with neither fails with
/// [`Error::MissingColumn`] naming the source column.
pub fn rename_education_column(mut df: DataFrame) -> Result<DataFrame> {
    if has_column(&df, SOURCE_RATE_COLUMN) {
        df.rename(SOURCE_RATE_COLUMN, EDUCATION_RATE.into())?;
        Ok(df)
    } else if has_column(&df, EDUCATION_RATE) {
        debug!("rate column already canonical");
        Ok(df)
    } else {
        Err(Error::MissingColumn(SOURCE_RATE_COLUMN.to_string()))
    }
}

/// Drop every row with a missing value in one of [`REQUIRED_COLUMNS`].
///
/// NaN counts as missing in floating point columns. Missing values in any
/// other column are kept. Row order is preserved.
pub fn drop_incomplete_rows(df: &DataFrame) -> Result<DataFrame> {
    let mut keep = BooleanChunked::full(PlSmallStr::from("keep"), true, df.height());
    for name in REQUIRED_COLUMNS {
        keep = &keep & &present_mask(require_column(df, name)?)?;
    }
    Ok(df.filter(&keep)?)
}

/// `true` where the column holds a usable value.
fn present_mask(column: &Column) -> Result<BooleanChunked> {
    let mut mask = column.is_not_null();
    if column.dtype().is_float() {
        let floats = column.cast(&DataType::Float64)?;
        mask = &mask & &floats.f64()?.is_not_nan();
    }
    Ok(mask)
}

/// Rename the rate column and drop incomplete rows.
#[instrument(skip(df), fields(rows = df.height()))]
pub fn preprocess(df: DataFrame) -> Result<DataFrame> {
    let renamed = rename_education_column(df)?;
    let cleaned = drop_incomplete_rows(&renamed)?;
    debug!(
        kept = cleaned.height(),
        dropped = renamed.height() - cleaned.height(),
        "dropped incomplete rows"
    );
    Ok(cleaned)
}
