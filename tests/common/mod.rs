// Shared helpers for wsmrank integration tests
#![allow(dead_code)]

use std::path::PathBuf;
use wsmrank::{DestinationRecord, WeightPercentages};

pub const DEFAULT_WEIGHTS: [f64; 4] = [30.0, 25.0, 20.0, 25.0];

/// Path to a file under `tests/data`.
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

pub fn record(name: &str, distance: f64, cost: f64, facility: u8, rating: f64) -> DestinationRecord {
    DestinationRecord::new(name, distance, cost, facility, rating).expect("valid test record")
}

pub fn default_weights() -> WeightPercentages {
    WeightPercentages::from_slice(&DEFAULT_WEIGHTS).expect("default weights")
}

// Helper to create temporary test files
pub fn create_test_file(content: &str, extension: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join(format!("test.{}", extension));
    std::fs::write(&file_path, content).expect("Failed to write test file");
    (temp_dir, file_path)
}
