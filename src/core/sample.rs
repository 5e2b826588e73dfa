//! Built-in example dataset of ten destinations in Deli Serdang.

use super::types::DestinationRecord;
use crate::errors::Result;

/// Raw sample rows: name, distance (km), cost, facility, rating.
pub const SAMPLE_ROWS: [(&str, f64, f64, u8, f64); 10] = [
    ("Air Terjun Dua Warna", 66.0, 25000.0, 4, 4.0),
    ("Air Terjun Sempurga Putih", 66.0, 20000.0, 3, 4.0),
    ("Air Terjun Pelangi Indah", 71.0, 25000.0, 3, 4.0),
    ("Pulau Siba", 50.0, 30000.0, 4, 4.0),
    ("Danau Linting", 70.0, 20000.0, 4, 4.0),
    ("Pemandian Alam Loknya", 61.0, 15000.0, 3, 4.0),
    ("Pemandian Alam Sembabe", 41.0, 15000.0, 4, 4.0),
    ("Pemandian Alam Lau Siegmbura", 54.0, 20000.0, 4, 5.0),
    ("Pantai Salju", 66.0, 25000.0, 4, 4.0),
    ("Hillpark Sibolangi", 59.0, 110000.0, 4, 5.0),
];

pub fn sample_destinations() -> Result<Vec<DestinationRecord>> {
    SAMPLE_ROWS
        .iter()
        .map(|&(name, distance, cost, facility, rating)| {
            DestinationRecord::new(name, distance, cost, facility, rating)
        })
        .collect()
}
