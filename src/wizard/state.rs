//! Wizard state machine with an explicit transition table and pure guards.
//!
//! # Step Graph
//!
//! ```text
//!   ┌──────────────────────────┐  Continue (records > 0)  ┌───────────────────┐
//!   │  CollectingDestinations  │ ───────────────────────► │ CollectingWeights │
//!   │      (EditRecords)       │ ◄─────────────────────── │   (EditWeights)   │
//!   └──────────────────────────┘           Back           └───────────────────┘
//!                ▲                                                  │
//!                │ NewAnalysis                 Compute (total = 100) │
//!                │                                                  ▼
//!                │                                        ┌───────────────────┐
//!                └─────────────────────────────────────── │  ShowingResults   │
//!                                                         └───────────────────┘
//! ```

use serde::Serialize;
use std::fmt;

/// The three ordered wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum WizardStep {
    #[default]
    CollectingDestinations,
    CollectingWeights,
    ShowingResults,
}

impl WizardStep {
    /// 1-based position shown to the user.
    pub fn number(self) -> u8 {
        match self {
            Self::CollectingDestinations => 1,
            Self::CollectingWeights => 2,
            Self::ShowingResults => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::CollectingDestinations => "Destination data",
            Self::CollectingWeights => "Criteria weights",
            Self::ShowingResults => "Results",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CollectingDestinations => write!(f, "entering destinations"),
            Self::CollectingWeights => write!(f, "entering criteria weights"),
            Self::ShowingResults => write!(f, "showing results"),
        }
    }
}

/// User actions that the state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WizardAction {
    /// Add, import or replace destination records
    EditRecords,
    Continue,
    /// Change the draft weight percentages
    EditWeights,
    Back,
    Compute,
    NewAnalysis,
}

impl fmt::Display for WizardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EditRecords => "edit destinations",
            Self::Continue => "continue to criteria weights",
            Self::EditWeights => "change weights",
            Self::Back => "go back to destinations",
            Self::Compute => "compute scores",
            Self::NewAnalysis => "start a new analysis",
        };
        f.write_str(text)
    }
}

/// Valid transitions. Any (step, action) pair not listed is rejected.
pub const TRANSITIONS: &[(WizardStep, WizardAction, WizardStep)] = &[
    // Step 1
    (
        WizardStep::CollectingDestinations,
        WizardAction::EditRecords,
        WizardStep::CollectingDestinations,
    ),
    (
        WizardStep::CollectingDestinations,
        WizardAction::Continue,
        WizardStep::CollectingWeights,
    ),
    // Step 2
    (
        WizardStep::CollectingWeights,
        WizardAction::EditWeights,
        WizardStep::CollectingWeights,
    ),
    (
        WizardStep::CollectingWeights,
        WizardAction::Back,
        WizardStep::CollectingDestinations,
    ),
    (
        WizardStep::CollectingWeights,
        WizardAction::Compute,
        WizardStep::ShowingResults,
    ),
    // Step 3
    (
        WizardStep::ShowingResults,
        WizardAction::NewAnalysis,
        WizardStep::CollectingDestinations,
    ),
];

/// Target step for an action, if the table allows it.
pub fn next_step(from: WizardStep, action: WizardAction) -> Option<WizardStep> {
    TRANSITIONS
        .iter()
        .find(|(f, a, _)| *f == from && *a == action)
        .map(|(_, _, to)| *to)
}

pub fn is_valid_transition(from: WizardStep, action: WizardAction) -> bool {
    next_step(from, action).is_some()
}

/// Actions offered from a step, in table order.
pub fn available_actions(from: WizardStep) -> Vec<WizardAction> {
    TRANSITIONS
        .iter()
        .filter(|(f, _, _)| *f == from)
        .map(|(_, action, _)| *action)
        .collect()
}

// ============================================================================
// Pure Guard Functions
// ============================================================================

/// Guard: can leave data entry? Requires at least one record.
pub fn can_continue(from: WizardStep, record_count: usize) -> bool {
    from == WizardStep::CollectingDestinations && record_count > 0
}

/// Guard: can compute? Requires the draft weights to total 100.
pub fn can_compute(from: WizardStep, weights_total_hundred: bool) -> bool {
    from == WizardStep::CollectingWeights && weights_total_hundred
}
