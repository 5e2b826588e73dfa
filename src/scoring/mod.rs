//! Weighted Sum Model scoring.
//!
//! The pipeline runs in four pure stages over an in-memory record set:
//!
//! 1. [`normalizer`]: rescale each criterion column to [0, 1]
//! 2. [`scorer`]: weighted linear sum per record
//! 3. [`ranker`]: stable descending sort, ranks 1..=N
//! 4. [`summary`]: statistics for presentation
//!
//! [`analyze`] chains them into a single [`Analysis`].

pub mod normalizer;
pub mod ranker;
pub mod scorer;
pub mod summary;
pub mod weights;

pub use normalizer::{normalize, normalize_benefit, normalize_column, normalize_cost};
pub use ranker::rank;
pub use scorer::{score, weighted_sum};
pub use summary::{summarize, CriterionSummary, Stats, SummaryStatistics};
pub use weights::{CriteriaWeights, WeightPercentages, PERCENT_TOTAL, WEIGHT_TOLERANCE};

use crate::core::{DestinationRecord, NormalizedRecord, RankedResult};
use crate::errors::{Result, WizardError};
use serde::Serialize;
use tracing::{debug, debug_span};

/// Everything the presentation layer needs for the results step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub weights: CriteriaWeights,
    /// Normalized rows in input order
    pub normalized: Vec<NormalizedRecord>,
    /// Rows ordered by rank
    pub ranking: Vec<RankedResult>,
    pub summary: SummaryStatistics,
}

impl Analysis {
    /// The rank-1 destination.
    pub fn recommended(&self) -> Option<&RankedResult> {
        self.ranking.first()
    }

    /// At most `limit` ranked rows; all rows when `limit` is `None`.
    pub fn top(&self, limit: Option<usize>) -> &[RankedResult] {
        let end = limit.map_or(self.ranking.len(), |n| n.min(self.ranking.len()));
        &self.ranking[..end]
    }
}

/// Normalize, score, rank and summarize a record set.
pub fn analyze(records: &[DestinationRecord], weights: &CriteriaWeights) -> Result<Analysis> {
    let _span = debug_span!("analyze", records = records.len()).entered();

    let normalized = normalize(records)?;
    let scores = score(&normalized, weights)?;
    let ranking = rank(records, &scores);
    let summary = summarize(records, &scores).ok_or(WizardError::EmptyRecordSet)?;

    if let Some(top) = ranking.first() {
        debug!(
            destination = top.record.name(),
            score = top.score,
            "Recommended destination"
        );
    }

    Ok(Analysis {
        weights: *weights,
        normalized,
        ranking,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample_destinations;

    fn default_weights() -> CriteriaWeights {
        CriteriaWeights::from_percentages(&WeightPercentages::default()).unwrap()
    }

    #[test]
    fn test_sample_recommendation() {
        let analysis = analyze(&sample_destinations().unwrap(), &default_weights()).unwrap();
        let top = analysis.recommended().unwrap();
        assert_eq!(top.record.name(), "Pemandian Alam Sembabe");
        assert_eq!(top.rank, 1);
        assert!((top.score - 0.95).abs() < 1e-9);

        let second = &analysis.ranking[1];
        assert_eq!(second.record.name(), "Pemandian Alam Lau Siegmbura");
    }

    #[test]
    fn test_identical_sample_rows_tie_in_input_order() {
        let analysis = analyze(&sample_destinations().unwrap(), &default_weights()).unwrap();
        let position = |name: &str| {
            analysis
                .ranking
                .iter()
                .position(|r| r.record.name() == name)
                .unwrap()
        };
        let dua_warna = position("Air Terjun Dua Warna");
        let pantai = position("Pantai Salju");
        assert_eq!(pantai, dua_warna + 1);
        assert_eq!(
            analysis.ranking[dua_warna].score,
            analysis.ranking[pantai].score
        );
    }

    #[test]
    fn test_top_limits_rows() {
        let analysis = analyze(&sample_destinations().unwrap(), &default_weights()).unwrap();
        assert_eq!(analysis.top(Some(3)).len(), 3);
        assert_eq!(analysis.top(Some(50)).len(), 10);
        assert_eq!(analysis.top(None).len(), 10);
    }

    #[test]
    fn test_empty_records_fail() {
        assert_eq!(
            analyze(&[], &default_weights()),
            Err(WizardError::EmptyRecordSet)
        );
    }
}
