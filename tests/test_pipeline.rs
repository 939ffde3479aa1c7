mod common;

use approx::assert_relative_eq;
use common::{sample_rows, write_csv, RecordingVisualizer};
use edu_stats::edu_core::{KurtType, SkewType};
use edu_stats::edu_polars::{PREVIEW_BANNER, SOURCE_RATE_COLUMN};
use edu_stats::edu_viz::{CATEGORICAL_FILE, RELATIONAL_FILE, STATISTICAL_FILE};
use edu_stats::edu_viz::NullVisualizer;
use edu_stats::{run, run_with, AnalysisConfig, Error};

fn config_for(path: std::path::PathBuf) -> AnalysisConfig {
    AnalysisConfig::default().with_input_path(path)
}

#[test]
fn test_full_run_prints_preview_then_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "data.csv", &sample_rows());
    let mut out = Vec::new();
    let mut viz = RecordingVisualizer::default();

    let report = run_with(&config_for(path), &mut out, &mut viz).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with(PREVIEW_BANNER));
    let report_at = text.find("\n\nFor the attribute Education_Rate:\n").unwrap();
    assert!(text[..report_at].contains("Albania"));
    assert!(text.trim_end().ends_with(&format!(
        "The data was {} and {}.",
        report.classification.skew_type, report.classification.kurt_type
    )));

    assert_eq!(report.rows, 6);
    assert_relative_eq!(report.moments.mean(), 69.25, epsilon = 1e-12);
    assert!(text.contains("Mean = 69.25,"));
}

#[test]
fn test_plots_receive_cleaned_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "data.csv", &sample_rows());
    let mut viz = RecordingVisualizer::default();

    let report = run_with(&config_for(path), &mut Vec::new(), &mut viz).unwrap();

    assert_eq!(viz.calls, 3);
    assert_eq!(report.plots.len(), 3);
    assert_eq!(viz.points.len(), 6);
    assert!(viz.points.contains(&(1990.0, 60.5)));

    let bars: Vec<&str> = viz.means.iter().map(|m| m.entity.as_str()).collect();
    assert_eq!(bars, vec!["China", "Brazil", "Albania"]);
    assert_relative_eq!(viz.means[0].mean, 75.0);

    let violins: Vec<&str> = viz.samples.iter().map(|s| s.entity.as_str()).collect();
    assert_eq!(violins, vec!["Albania", "Brazil", "China"]);
}

#[test]
fn test_flat_table_has_undefined_kurtosis() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "flat.csv",
        &["A,AAA,2000,50", "A,AAA,2001,50", "B,BBB,2000,50"],
    );
    let mut out = Vec::new();

    let report = run_with(&config_for(path), &mut out, &mut NullVisualizer).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(report.moments.std_dev(), 0.0);
    assert_eq!(report.moments.skewness(), 0.0);
    assert!(report.moments.excess_kurtosis().is_nan());
    assert_eq!(report.classification.skew_type, SkewType::NotSkewed);
    assert_eq!(report.classification.kurt_type, KurtType::Mesokurtic);
    assert!(report.plots.is_empty());
    assert!(text.contains(
        "Mean = 50.00, Standard Deviation = 0.00, Skewness = 0.00, and Excess Kurtosis = nan."
    ));
}

#[test]
fn test_empty_table_fails_before_plotting() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "no_years.csv", &["A,AAA,,50", "B,BBB,,60"]);
    let mut out = Vec::new();
    let mut viz = RecordingVisualizer::default();

    let err = run_with(&config_for(path), &mut out, &mut viz).unwrap_err();

    assert!(matches!(&err, Error::Data(e) if e.is_insufficient_data()));
    assert_eq!(viz.calls, 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(PREVIEW_BANNER));
    assert!(!text.contains("For the attribute"));
}

#[test]
fn test_missing_rate_column_is_named() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wrong.csv");
    std::fs::write(&path, "Entity,Year,Rate\nA,2000,50\n").unwrap();

    let err = run_with(&config_for(path), &mut Vec::new(), &mut NullVisualizer).unwrap_err();
    match err {
        Error::Data(e) => assert_eq!(e.missing_column(), Some(SOURCE_RATE_COLUMN)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path().join("absent.csv"));
    let err = run_with(&config, &mut Vec::new(), &mut NullVisualizer).unwrap_err();
    assert!(matches!(err, Error::Data(edu_stats::edu_polars::Error::Io(_))));
}

#[test]
fn test_other_target_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "data.csv", &sample_rows());
    let config = config_for(path).with_target_column("Year");

    let report = run_with(&config, &mut Vec::new(), &mut NullVisualizer).unwrap();
    assert_eq!(report.column, "Year");
    assert_relative_eq!(report.moments.mean(), 1995.0);
}

#[test]
fn test_run_without_plots_writes_no_images() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "data.csv", &sample_rows());
    let plots = dir.path().join("plots");
    let config = config_for(path).with_output_dir(&plots).with_plots(false);

    let report = run(&config).unwrap();
    assert!(report.plots.is_empty());
    assert!(!plots.exists());
}

#[test]
fn test_preview_shows_canonical_rate_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "data.csv", &sample_rows());
    let mut out = Vec::new();

    run_with(&config_for(path), &mut out, &mut NullVisualizer).unwrap();
    let text = String::from_utf8(out).unwrap();
    let preview = &text[..text.find("For the attribute").unwrap()];

    assert!(preview.contains("Education_Rate"));
    assert!(!preview.contains("Share of population"));
}

#[test]
fn test_run_writes_plots_into_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "data.csv", &sample_rows());
    let plots = dir.path().join("plots");
    let config = config_for(path).with_output_dir(&plots);

    let first = run(&config).unwrap();
    let second = run(&config).unwrap();

    assert_eq!(first.plots, second.plots);
    for name in [RELATIONAL_FILE, CATEGORICAL_FILE, STATISTICAL_FILE] {
        let len = std::fs::metadata(plots.join(name)).unwrap().len();
        assert!(len > 0, "{name} is empty");
    }
}

#[test]
fn test_failed_run_leaves_no_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let plots = dir.path().join("plots");
    let config = config_for(dir.path().join("absent.csv")).with_output_dir(&plots);

    assert!(run(&config).is_err());
    assert!(!plots.exists());
}
