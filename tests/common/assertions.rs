//! Assertion helpers for tests.

use colours::models::{AnalysisReport, VolumeReport};
use pretty_assertions::assert_eq;

/// Assert report volumes as (bucket name, fraction) pairs, in order
pub fn assert_volumes(report: &AnalysisReport, expected: &[(&str, f64)]) {
    let volumes = report
        .volumes
        .as_ref()
        .expect("Report should contain volumes");
    let actual: Vec<(&str, f64)> = volumes
        .iter()
        .map(|v| (v.bucket.as_str(), v.fraction))
        .collect();
    assert_eq!(actual, expected.to_vec());
}

/// Assert volume fractions add up to 1.0
pub fn assert_fractions_sum_to_one(volumes: &[VolumeReport]) {
    let total: f64 = volumes.iter().map(|v| v.fraction).sum();
    assert!(
        (total - 1.0).abs() < 1e-6,
        "Expected fractions to sum to 1.0, got {total}"
    );
}

/// Assert the report's average colour has the given hex value
pub fn assert_average_hex(report: &AnalysisReport, expected: &str) {
    let average = report
        .average
        .as_ref()
        .expect("Report should contain an average colour");
    assert_eq!(average.hex, expected, "Unexpected average colour");
}
