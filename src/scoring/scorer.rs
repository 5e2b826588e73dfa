use super::weights::CriteriaWeights;
use crate::core::{Criterion, NormalizedRecord};
use crate::errors::Result;

/// Weighted sum of one normalized row. No rounding is applied.
pub fn weighted_sum(record: &NormalizedRecord, weights: &CriteriaWeights) -> f64 {
    Criterion::ALL
        .iter()
        .map(|&criterion| weights.get(criterion) * record.value(criterion))
        .sum()
}

/// Score every normalized row, in input order.
///
/// Fails with `InvalidWeights` if the fractions are negative or do not sum
/// to 1.0.
pub fn score(records: &[NormalizedRecord], weights: &CriteriaWeights) -> Result<Vec<f64>> {
    weights.validate()?;
    Ok(records
        .iter()
        .map(|record| weighted_sum(record, weights))
        .collect())
}
