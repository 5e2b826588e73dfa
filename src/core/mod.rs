//! Domain model: validated destination records, criteria metadata and the
//! derived rows produced by the scoring pipeline.

pub mod sample;
pub mod types;

pub use sample::{sample_destinations, SAMPLE_ROWS};
pub use types::{
    Criterion, CriterionKind, DestinationRecord, NormalizedRecord, RankedResult, FACILITY_RANGE,
    RATING_RANGE,
};
