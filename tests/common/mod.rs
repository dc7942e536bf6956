#![allow(dead_code)]

use std::sync::Arc;

use approx::assert_relative_eq;
use camino::Utf8Path;
use hifitime::Epoch;
use skydome::astronomy::loaders::{AsterismLoader, HygDatabaseLoader};
use skydome::astronomy::StarCatalogue;
use skydome::coordinates::CartesianCoordinates;

pub const HYG_SAMPLE: &str = "tests/data/hygdata_sample.csv";
pub const ASTERISMS_SAMPLE: &str = "tests/data/asterisms_sample.txt";

/// Catalogue built from the sample HYG excerpt and its asterisms.
pub fn sample_catalogue() -> Arc<StarCatalogue> {
    let catalogue = StarCatalogue::builder()
        .load_from_path(Utf8Path::new(HYG_SAMPLE), &HygDatabaseLoader)
        .unwrap()
        .load_from_path(Utf8Path::new(ASTERISMS_SAMPLE), &AsterismLoader)
        .unwrap()
        .build()
        .unwrap();
    Arc::new(catalogue)
}

/// 2020-06-01T00:00:00 UTC
pub fn reference_instant() -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(2020, 6, 1)
}

pub fn assert_position_close(actual: &CartesianCoordinates, expected: (f64, f64), epsilon: f64) {
    assert_relative_eq!(actual.x(), expected.0, epsilon = epsilon, max_relative = epsilon);
    assert_relative_eq!(actual.y(), expected.1, epsilon = epsilon, max_relative = epsilon);
}
