//! Error types for the decision-support core.
//!
//! Every failure in the wizard is recoverable: the operation that would break
//! an invariant is rejected, the session keeps its prior state, and the error
//! is handed back to the presentation layer so the user can retry.
//!
//! # Example
//!
//! ```rust
//! use wsmrank::errors::WizardError;
//!
//! let err = WizardError::invalid_record(3, "distance must be greater than 0");
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid record at row 3: distance must be greater than 0"
//! );
//! ```

use crate::wizard::{WizardAction, WizardStep};
use thiserror::Error;

/// Unified error type for wizard, scoring and import operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    /// Import is missing one or more required columns
    #[error("Invalid columns: missing required column(s) {}", .missing.join(", "))]
    InvalidColumns { missing: Vec<String> },

    /// A record violates a field constraint (row is 1-based when known)
    #[error("Invalid record{}: {reason}", row_suffix(.row))]
    InvalidRecord { row: Option<usize>, reason: String },

    /// Weights are negative, out of range, or do not sum to 100% / 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Attempted to proceed past data entry with zero records
    #[error("No destinations entered; add at least one destination first")]
    EmptyRecordSet,

    /// Action not permitted from the current wizard step
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: WizardStep,
        action: WizardAction,
    },

    /// Reading or parsing an import file failed
    #[error("Import failed: {0}")]
    Import(String),
}

fn row_suffix(row: &Option<usize>) -> String {
    match row {
        Some(row) => format!(" at row {row}"),
        None => String::new(),
    }
}

impl WizardError {
    /// Create a record error tied to a 1-based row.
    pub fn invalid_record(row: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            row: Some(row),
            reason: reason.into(),
        }
    }

    /// Create a record error for a single manually entered record.
    pub fn invalid_field(reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            row: None,
            reason: reason.into(),
        }
    }

    /// Attach a row number to a record error that has none.
    pub fn at_row(self, row: usize) -> Self {
        match self {
            Self::InvalidRecord { row: None, reason } => Self::InvalidRecord {
                row: Some(row),
                reason,
            },
            other => other,
        }
    }

    pub fn invalid_weights(reason: impl Into<String>) -> Self {
        Self::InvalidWeights(reason.into())
    }

    pub fn import(message: impl Into<String>) -> Self {
        Self::Import(message.into())
    }

    /// Short category label used by the presentation layer.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidColumns { .. } => "InvalidColumns",
            Self::InvalidRecord { .. } => "InvalidRecord",
            Self::InvalidWeights(_) => "InvalidWeights",
            Self::EmptyRecordSet => "EmptyRecordSet",
            Self::InvalidTransition { .. } => "InvalidTransition",
            Self::Import(_) => "Import",
        }
    }
}

impl From<csv::Error> for WizardError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

impl From<std::io::Error> for WizardError {
    fn from(err: std::io::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias using the wizard error type
pub type Result<T> = std::result::Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_columns_message_lists_every_column() {
        let err = WizardError::InvalidColumns {
            missing: vec!["Rating (1-5)".to_string(), "Biaya (ribu Rp)".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid columns: missing required column(s) Rating (1-5), Biaya (ribu Rp)"
        );
    }

    #[test]
    fn test_invalid_field_has_no_row() {
        let err = WizardError::invalid_field("facility must be between 1 and 5");
        assert_eq!(
            err.to_string(),
            "Invalid record: facility must be between 1 and 5"
        );
    }

    #[test]
    fn test_at_row_only_fills_missing_row() {
        let err = WizardError::invalid_field("bad").at_row(4);
        assert_eq!(err, WizardError::invalid_record(4, "bad"));

        let err = WizardError::invalid_record(2, "bad").at_row(9);
        assert_eq!(err, WizardError::invalid_record(2, "bad"));

        assert_eq!(
            WizardError::EmptyRecordSet.at_row(1),
            WizardError::EmptyRecordSet
        );
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = WizardError::InvalidTransition {
            from: WizardStep::CollectingWeights,
            action: WizardAction::NewAnalysis,
        };
        assert_eq!(
            err.to_string(),
            "Cannot start a new analysis while entering criteria weights"
        );
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(WizardError::EmptyRecordSet.category(), "EmptyRecordSet");
        assert_eq!(
            WizardError::invalid_weights("sum is 160").category(),
            "InvalidWeights"
        );
    }
}
