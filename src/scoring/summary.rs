use crate::core::{Criterion, CriterionKind, DestinationRecord};
use serde::Serialize;

/// Min, max and mean of a series of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Stats {
    /// Returns `None` for an empty series.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (count, min, max, sum) = values.into_iter().fold(
            (0usize, f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(count, min, max, sum), v| (count + 1, min.min(v), max.max(v), sum + v),
        );
        (count > 0).then(|| Self {
            min,
            max,
            mean: sum / count as f64,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionSummary {
    pub criterion: Criterion,
    pub kind: CriterionKind,
    #[serde(flatten)]
    pub stats: Stats,
}

/// Figures shown next to the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub record_count: usize,
    pub criteria: Vec<CriterionSummary>,
    pub score: Stats,
}

/// Summarize raw criterion values and scores. `None` when there are no records.
pub fn summarize(records: &[DestinationRecord], scores: &[f64]) -> Option<SummaryStatistics> {
    let score = Stats::from_values(scores.iter().copied())?;
    let criteria = Criterion::ALL
        .iter()
        .filter_map(|&criterion| {
            Stats::from_values(records.iter().map(|r| r.value(criterion))).map(|stats| {
                CriterionSummary {
                    criterion,
                    kind: criterion.kind(),
                    stats,
                }
            })
        })
        .collect();

    Some(SummaryStatistics {
        record_count: records.len(),
        criteria,
        score,
    })
}
