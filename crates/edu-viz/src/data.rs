//! Plot-ready views of a canonical education table
//!
//! Each plot reads a different projection of the same table. The functions
//! here compute those projections so that rendering code only draws.

use std::collections::BTreeMap;

use edu_polars::{float_values, string_values, EDUCATION_RATE, ENTITY, YEAR};
use polars::prelude::*;

use crate::Result;

/// Number of bars in the categorical plot
pub const TOP_ENTITY_COUNT: usize = 10;

/// Entities shown in the statistical plot, in display order
pub const SAMPLE_ENTITIES: [&str; 5] = ["Albania", "Algeria", "Argentina", "Brazil", "China"];

/// Average rate of one entity
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMean {
    pub entity: String,
    pub mean: f64,
}

/// All rates observed for one entity, in table order
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySample {
    pub entity: String,
    pub values: Vec<f64>,
}

/// Everything the three report plots need
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    /// `(Year, Education_Rate)` for every row
    pub points: Vec<(f64, f64)>,
    /// Highest entity means, descending
    pub top_entities: Vec<EntityMean>,
    /// Rates of the allow-listed entities present in the table
    pub samples: Vec<EntitySample>,
}

impl PlotData {
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        Ok(Self {
            points: year_rate_points(df)?,
            top_entities: top_entities_by_mean(df, TOP_ENTITY_COUNT)?,
            samples: entity_samples(df, &SAMPLE_ENTITIES)?,
        })
    }
}

/// `(Year, Education_Rate)` pairs, skipping rows where either is missing.
pub fn year_rate_points(df: &DataFrame) -> Result<Vec<(f64, f64)>> {
    let years = &float_values(df, YEAR)?;
    let rates = &float_values(df, EDUCATION_RATE)?;
    Ok(years
        .into_iter()
        .zip(rates)
        .filter_map(|(year, rate)| Some((year?, rate?)))
        .collect())
}

/// Per-entity rate observations keyed by entity name (sorted).
fn rates_by_entity(df: &DataFrame) -> Result<BTreeMap<String, Vec<f64>>> {
    let entities = &string_values(df, ENTITY)?;
    let rates = &float_values(df, EDUCATION_RATE)?;

    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (entity, rate) in entities.into_iter().zip(rates) {
        if let (Some(entity), Some(rate)) = (entity, rate) {
            groups.entry(entity.to_string()).or_default().push(rate);
        }
    }
    Ok(groups)
}

/// The `n` entities with the highest mean rate, highest first.
///
/// Groups are formed in ascending name order and then stably sorted by mean,
/// so entities with equal means appear alphabetically.
pub fn top_entities_by_mean(df: &DataFrame, n: usize) -> Result<Vec<EntityMean>> {
    let mut means: Vec<EntityMean> = rates_by_entity(df)?
        .into_iter()
        .map(|(entity, rates)| EntityMean {
            mean: rates.iter().sum::<f64>() / rates.len() as f64,
            entity,
        })
        .collect();

    means.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    means.truncate(n);
    Ok(means)
}

/// Rates of each allow-listed entity, in allow-list order.
///
/// Entities absent from the table are skipped without error.
pub fn entity_samples(df: &DataFrame, allow_list: &[&str]) -> Result<Vec<EntitySample>> {
    let mut groups = rates_by_entity(df)?;
    Ok(allow_list
        .iter()
        .filter_map(|&name| {
            groups.remove(name).map(|values| EntitySample {
                entity: name.to_string(),
                values,
            })
        })
        .collect())
}

/// Median of a sample, `None` when empty.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
