//! Common test utilities for edu-polars tests

#![allow(dead_code)]

use edu_polars::{ENTITY, SOURCE_RATE_COLUMN, YEAR};
use polars::prelude::*;

/// One raw observation; `None` marks a missing field.
pub type RawRow = (Option<&'static str>, Option<i64>, Option<f64>);

/// Build a raw table with the published column names.
pub fn raw_df(rows: &[RawRow]) -> DataFrame {
    let entities: Vec<Option<&str>> = rows.iter().map(|r| r.0).collect();
    let years: Vec<Option<i64>> = rows.iter().map(|r| r.1).collect();
    let rates: Vec<Option<f64>> = rows.iter().map(|r| r.2).collect();
    DataFrame::new(vec![
        Series::new(PlSmallStr::from(ENTITY), entities).into(),
        Series::new(PlSmallStr::from(YEAR), years).into(),
        Series::new(PlSmallStr::from(SOURCE_RATE_COLUMN), rates).into(),
    ])
    .unwrap()
}

/// The three-row scenario where every rate is 50.
pub fn flat_scenario() -> DataFrame {
    raw_df(&[
        (Some("A"), Some(2000), Some(50.0)),
        (Some("A"), Some(2001), Some(50.0)),
        (Some("B"), Some(2000), Some(50.0)),
    ])
}
