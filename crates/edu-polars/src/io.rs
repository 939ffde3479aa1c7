//! CSV loading and console preview

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::{info, instrument};

use crate::Result;

/// Number of rows shown by [`preview`] in the pipeline
pub const PREVIEW_ROWS: usize = 5;

/// Banner printed above the raw-table preview
pub const PREVIEW_BANNER: &str = "--- Dataset Head ---";

/// Markers read as missing in addition to empty fields, as in pandas
/// `read_csv`. Lowercase `na` is a value.
pub const NULL_MARKERS: &[&str] = &[
    "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA", "NULL",
    "NaN", "None", "n/a", "nan", "null", "#N/A", "#N/A N/A", "#NA",
];

/// Read a CSV file with a header row into a [`DataFrame`].
///
/// The schema is inferred from every row, so a column whose first values
/// happen to be integral is still read as floating point when later rows are
/// not.
#[instrument]
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)?;
    let null_values = NullValues::AllColumns(NULL_MARKERS.iter().map(|m| (*m).into()).collect());

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|opts| opts.with_null_values(Some(null_values.clone())))
        .into_reader_with_file_handle(file)
        .finish()?;

    info!(rows = df.height(), columns = df.width(), "loaded CSV");
    Ok(df)
}

/// The banner followed by the first `rows` rows of `df`.
pub fn preview(df: &DataFrame, rows: usize) -> String {
    format!("{PREVIEW_BANNER}\n{}", df.head(Some(rows)))
}
