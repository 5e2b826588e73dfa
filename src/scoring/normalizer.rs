//! Benefit/cost normalization of the raw criterion columns.
//!
//! - Benefit columns (facility, rating): `value / max(column)`. A column whose
//!   maximum is not positive normalizes to 0 for every row.
//! - Cost columns (distance, cost): `min(column) / value`. Every value must be
//!   strictly positive.
//!
//! All functions are pure: the input slice is never modified and the output
//! keeps the input order and length.

use crate::core::{Criterion, CriterionKind, DestinationRecord, NormalizedRecord};
use crate::errors::{Result, WizardError};

/// Normalize a record set into dimensionless [0, 1] rows.
pub fn normalize(records: &[DestinationRecord]) -> Result<Vec<NormalizedRecord>> {
    if records.is_empty() {
        return Err(WizardError::EmptyRecordSet);
    }

    let distance = normalize_criterion(records, Criterion::Distance)?;
    let cost = normalize_criterion(records, Criterion::Cost)?;
    let facility = normalize_criterion(records, Criterion::Facility)?;
    let rating = normalize_criterion(records, Criterion::Rating)?;

    Ok(records
        .iter()
        .enumerate()
        .map(|(i, record)| NormalizedRecord {
            name: record.name().to_string(),
            distance: distance[i],
            cost: cost[i],
            facility: facility[i],
            rating: rating[i],
        })
        .collect())
}

fn normalize_criterion(records: &[DestinationRecord], criterion: Criterion) -> Result<Vec<f64>> {
    let values: Vec<f64> = records.iter().map(|r| r.value(criterion)).collect();
    normalize_column(&values, criterion.kind())
}

/// Normalize one column according to its criterion kind.
pub fn normalize_column(values: &[f64], kind: CriterionKind) -> Result<Vec<f64>> {
    match kind {
        CriterionKind::Benefit => Ok(normalize_benefit(values)),
        CriterionKind::Cost => normalize_cost(values),
    }
}

/// `value / max`, or 0 for every row when the maximum is not positive.
pub fn normalize_benefit(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 {
        values.iter().map(|&v| v / max).collect()
    } else {
        vec![0.0; values.len()]
    }
}

/// `min / value`; rejects any value that is not strictly positive.
pub fn normalize_cost(values: &[f64]) -> Result<Vec<f64>> {
    if let Some(position) = values.iter().position(|&v| !(v.is_finite() && v > 0.0)) {
        return Err(WizardError::invalid_record(
            position + 1,
            format!(
                "cost-type values must be greater than 0, got {}",
                values[position]
            ),
        ));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    Ok(values.iter().map(|&v| min / v).collect())
}
