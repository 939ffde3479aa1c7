//! Common test utilities for pipeline tests

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use edu_stats::edu_viz::{EntityMean, EntitySample, ReportVisualizer, Result};

/// Write `rows` under the published header into `dir/name`.
pub fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    // The rate column name contains a comma, so it is quoted
    writeln!(
        file,
        "Entity,Code,Year,\"Share of population with some formal education, 1820-2020\""
    )
    .unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    path
}

/// A small table with a clean row per entity-year plus incomplete rows.
pub fn sample_rows() -> Vec<&'static str> {
    vec![
        "Albania,ALB,1990,60.5",
        "Albania,ALB,2000,70.0",
        "Brazil,BRA,1990,55.0",
        "Brazil,BRA,2000,80.0",
        "China,CHN,1990,65.0",
        "China,,2000,85.0",
        "France,FRA,,99.0",
        ",XXX,2000,10.0",
        "Peru,PER,2000,",
    ]
}

/// Visualizer recording what each plot received
#[derive(Default, Debug)]
pub struct RecordingVisualizer {
    pub points: Vec<(f64, f64)>,
    pub means: Vec<EntityMean>,
    pub samples: Vec<EntitySample>,
    pub calls: usize,
}

impl ReportVisualizer for RecordingVisualizer {
    fn relational(&mut self, points: &[(f64, f64)]) -> Result<Option<PathBuf>> {
        self.calls += 1;
        self.points = points.to_vec();
        Ok(Some(PathBuf::from("relational_plot.png")))
    }

    fn categorical(&mut self, means: &[EntityMean]) -> Result<Option<PathBuf>> {
        self.calls += 1;
        self.means = means.to_vec();
        Ok(Some(PathBuf::from("categorical_plot.png")))
    }

    fn statistical(&mut self, samples: &[EntitySample]) -> Result<Option<PathBuf>> {
        self.calls += 1;
        self.samples = samples.to_vec();
        Ok(Some(PathBuf::from("statistical_plot.png")))
    }
}
