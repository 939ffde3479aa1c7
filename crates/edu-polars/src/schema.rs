//! Column names of the education-rate table and typed column access

use polars::prelude::*;

use crate::{Error, Result};

/// Country or region identifier
pub const ENTITY: &str = "Entity";

/// Observation year
pub const YEAR: &str = "Year";

/// Canonical name of the rate column after preprocessing
pub const EDUCATION_RATE: &str = "Education_Rate";

/// Name of the rate column as published in the source CSV
pub const SOURCE_RATE_COLUMN: &str = "Share of population with some formal education, 1820-2020";

/// Columns that must be present and non-null in a canonical table
pub const REQUIRED_COLUMNS: [&str; 3] = [EDUCATION_RATE, ENTITY, YEAR];

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// Look up a column, failing with [`Error::MissingColumn`] if absent.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::MissingColumn(name.to_string()))
}

/// Numeric column as `f64`; integer columns are widened.
pub fn float_values(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = require_column(df, name)?;
    let dtype = column.dtype();
    if !(dtype.is_float() || dtype.is_integer() || matches!(dtype, DataType::Null)) {
        return Err(Error::TypeMismatch {
            column: name.to_string(),
            expected: "numeric".to_string(),
            got: dtype.to_string(),
        });
    }
    Ok(column.cast(&DataType::Float64)?.f64()?.clone())
}

/// Column rendered as strings, for identifiers such as [`ENTITY`].
pub fn string_values(df: &DataFrame, name: &str) -> Result<StringChunked> {
    let column = require_column(df, name)?;
    Ok(column.cast(&DataType::String)?.str()?.clone())
}
