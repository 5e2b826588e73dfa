// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod scoring;
pub mod wizard;

// Re-export commonly used types
pub use crate::core::{
    sample_destinations, Criterion, CriterionKind, DestinationRecord, NormalizedRecord,
    RankedResult,
};

pub use crate::errors::{Result, WizardError};

pub use crate::scoring::{
    analyze, normalize, rank, score, Analysis, CriteriaWeights, SummaryStatistics,
    WeightPercentages,
};

pub use crate::io::{create_writer, import_csv_file, import_csv_reader, OutputFormat, OutputWriter};

pub use crate::wizard::{SessionState, WizardAction, WizardStep};
