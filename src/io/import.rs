//! Bulk import of destination records from CSV.
//!
//! The header row must contain the five required columns (see
//! [`Criterion::column_header`] and [`NAME_HEADER`]); matching is
//! case-insensitive and ignores surrounding whitespace, column order is
//! free, and extra columns are ignored. The import is all-or-nothing: the
//! first invalid row rejects the whole file.

use crate::core::{Criterion, DestinationRecord};
use crate::errors::{Result, WizardError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Header of the destination-name column.
pub const NAME_HEADER: &str = "Destinasi";

/// English alternative for the name column.
pub const NAME_ALIAS: &str = "Name";

/// Position of each required column in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub distance: usize,
    pub cost: usize,
    pub facility: usize,
    pub rating: usize,
}

fn header_matches(header: &str, canonical: &str, alias: &str) -> bool {
    let header = header.trim();
    header.eq_ignore_ascii_case(canonical) || header.eq_ignore_ascii_case(alias)
}

/// Locate the required columns, reporting every missing one at once.
pub fn resolve_columns(headers: &[&str]) -> Result<ColumnMap> {
    let find = |canonical: &str, alias: &str| {
        headers
            .iter()
            .position(|h| header_matches(h, canonical, alias))
    };

    let name = find(NAME_HEADER, NAME_ALIAS);
    let [distance, cost, facility, rating] =
        Criterion::ALL.map(|c| find(c.column_header(), c.column_alias()));

    match (name, distance, cost, facility, rating) {
        (Some(name), Some(distance), Some(cost), Some(facility), Some(rating)) => Ok(ColumnMap {
            name,
            distance,
            cost,
            facility,
            rating,
        }),
        _ => {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push(NAME_HEADER.to_string());
            }
            for (criterion, found) in Criterion::ALL.iter().zip([distance, cost, facility, rating]) {
                if found.is_none() {
                    missing.push(criterion.column_header().to_string());
                }
            }
            Err(WizardError::InvalidColumns { missing })
        }
    }
}

/// Read records from any CSV source.
pub fn import_csv_reader<R: Read>(reader: R) -> Result<Vec<DestinationRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = resolve_columns(&headers.iter().collect::<Vec<_>>())?;
    debug!(?columns, "Resolved import columns");

    csv_reader
        .records()
        .enumerate()
        .map(|(i, row)| {
            let row_number = i + 1;
            let row = row?;
            parse_row(&row, &columns).map_err(|e| e.at_row(row_number))
        })
        .collect()
}

/// Read records from a CSV file on disk.
pub fn import_csv_file(path: &Path) -> Result<Vec<DestinationRecord>> {
    let file = File::open(path)
        .map_err(|e| WizardError::import(format!("cannot open {}: {e}", path.display())))?;
    let records = import_csv_reader(file)?;
    info!(path = %path.display(), count = records.len(), "Imported destinations");
    Ok(records)
}

fn field<'r>(row: &'r csv::StringRecord, index: usize, column: &str) -> Result<&'r str> {
    match row.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(WizardError::invalid_field(format!(
            "missing value for column '{column}'"
        ))),
    }
}

fn parse_float(row: &csv::StringRecord, index: usize, column: &str) -> Result<f64> {
    let raw = field(row, index, column)?;
    raw.parse::<f64>().map_err(|_| {
        WizardError::invalid_field(format!("'{raw}' in column '{column}' is not a number"))
    })
}

/// Facility is an integer score; integral floats such as `4.0` are accepted.
fn parse_facility(row: &csv::StringRecord, index: usize) -> Result<u8> {
    let column = Criterion::Facility.column_header();
    let raw = field(row, index, column)?;
    if let Ok(value) = raw.parse::<u8>() {
        return Ok(value);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&value) => {
            Ok(value as u8)
        }
        _ => Err(WizardError::invalid_field(format!(
            "'{raw}' in column '{column}' is not an integer between 1 and 5"
        ))),
    }
}

fn parse_row(row: &csv::StringRecord, columns: &ColumnMap) -> Result<DestinationRecord> {
    let name = field(row, columns.name, NAME_HEADER)?;
    let distance = parse_float(row, columns.distance, Criterion::Distance.column_header())?;
    let cost = parse_float(row, columns.cost, Criterion::Cost.column_header())?;
    let facility = parse_facility(row, columns.facility)?;
    let rating = parse_float(row, columns.rating, Criterion::Rating.column_header())?;
    DestinationRecord::new(name, distance, cost, facility, rating)
}
