//! Moment analysis implementation

use edu_core::Moments;
use polars::prelude::*;
use tracing::debug;

use crate::schema::float_values;
use crate::{Error, MomentsExt, Result};

impl MomentsExt for DataFrame {
    fn numeric_sample(&self, column: &str) -> Result<Vec<f64>> {
        let values = float_values(self, column)?;
        let mut sample = Vec::with_capacity(values.len() - values.null_count());
        for value in &values {
            if let Some(v) = value.filter(|v| !v.is_nan()) {
                sample.push(v);
            }
        }
        Ok(sample)
    }

    fn moments(&self, column: &str) -> Result<Moments> {
        let sample = self.numeric_sample(column)?;
        if sample.is_empty() {
            return Err(Error::InsufficientData {
                column: column.to_string(),
                actual: 0,
            });
        }

        debug!(column, n = sample.len(), "computing moments");
        Ok(Moments::from_sample(&sample)?)
    }
}
