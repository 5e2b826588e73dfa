//! Session state for one run of the wizard.
//!
//! A single [`SessionState`] value is created per session and passed by
//! reference to every handler. Each operation checks the transition table
//! first and mutates nothing when it fails, so the session always stays in
//! its prior state on error.

use super::state::{can_compute, can_continue, next_step, WizardAction, WizardStep};
use crate::core::{sample_destinations, DestinationRecord};
use crate::errors::{Result, WizardError};
use crate::formatting::format_percent;
use crate::scoring::{analyze, Analysis, CriteriaWeights, WeightPercentages};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    step: WizardStep,
    records: Vec<DestinationRecord>,
    draft_weights: WeightPercentages,
    default_weights: WeightPercentages,
    weights: Option<CriteriaWeights>,
    analysis: Option<Analysis>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(WeightPercentages::default())
    }
}

impl SessionState {
    /// Start a session whose weight form is pre-filled with `default_weights`.
    pub fn new(default_weights: WeightPercentages) -> Self {
        Self {
            step: WizardStep::CollectingDestinations,
            records: Vec::new(),
            draft_weights: default_weights,
            default_weights,
            weights: None,
            analysis: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn records(&self) -> &[DestinationRecord] {
        &self.records
    }

    pub fn draft_weights(&self) -> &WeightPercentages {
        &self.draft_weights
    }

    /// Weights committed by the last successful compute.
    pub fn weights(&self) -> Option<&CriteriaWeights> {
        self.weights.as_ref()
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    fn ensure(&self, action: WizardAction) -> Result<WizardStep> {
        next_step(self.step, action).ok_or(WizardError::InvalidTransition {
            from: self.step,
            action,
        })
    }

    fn move_to(&mut self, to: WizardStep, action: WizardAction) {
        if to != self.step {
            debug!(from = ?self.step, to = ?to, action = %action, "Wizard transition");
        }
        self.step = to;
    }

    /// Append one validated record.
    pub fn add_record(&mut self, record: DestinationRecord) -> Result<()> {
        let to = self.ensure(WizardAction::EditRecords)?;
        debug!(name = record.name(), "Adding destination");
        self.records.push(record);
        self.move_to(to, WizardAction::EditRecords);
        Ok(())
    }

    /// Replace the whole record set, as a bulk import does.
    pub fn replace_records(&mut self, records: Vec<DestinationRecord>) -> Result<usize> {
        let to = self.ensure(WizardAction::EditRecords)?;
        info!(count = records.len(), "Replacing destination records");
        self.records = records;
        self.move_to(to, WizardAction::EditRecords);
        Ok(self.records.len())
    }

    /// Replace the record set with the built-in sample dataset.
    pub fn load_sample(&mut self) -> Result<usize> {
        self.ensure(WizardAction::EditRecords)?;
        self.replace_records(sample_destinations()?)
    }

    /// Step 1 → step 2; requires at least one record.
    pub fn continue_to_weights(&mut self) -> Result<()> {
        let to = self.ensure(WizardAction::Continue)?;
        if !can_continue(self.step, self.records.len()) {
            return Err(WizardError::EmptyRecordSet);
        }
        self.move_to(to, WizardAction::Continue);
        Ok(())
    }

    /// Store draft percentages. Each must be in [0, 100]; the total is only
    /// enforced by [`compute`](Self::compute). Returns the draft total.
    pub fn set_weights(&mut self, percentages: WeightPercentages) -> Result<f64> {
        let to = self.ensure(WizardAction::EditWeights)?;
        percentages.validate_ranges()?;
        self.draft_weights = percentages;
        self.move_to(to, WizardAction::EditWeights);
        Ok(percentages.total())
    }

    /// Step 2 → step 1. Draft weights are kept.
    pub fn back(&mut self) -> Result<()> {
        let to = self.ensure(WizardAction::Back)?;
        self.move_to(to, WizardAction::Back);
        Ok(())
    }

    /// Commit the draft weights, run the pipeline and show results.
    pub fn compute(&mut self) -> Result<&Analysis> {
        let to = self.ensure(WizardAction::Compute)?;
        self.draft_weights.validate_ranges()?;
        if !can_compute(self.step, self.draft_weights.sums_to_hundred()) {
            return Err(WizardError::invalid_weights(format!(
                "weights must total exactly 100%, currently {}%",
                format_percent(self.draft_weights.total())
            )));
        }

        let weights = CriteriaWeights::from_percentages(&self.draft_weights)?;
        let analysis = analyze(&self.records, &weights)?;
        info!(
            distance = self.draft_weights.distance,
            cost = self.draft_weights.cost,
            facility = self.draft_weights.facility,
            rating = self.draft_weights.rating,
            "Committed criteria weights"
        );

        self.weights = Some(weights);
        self.move_to(to, WizardAction::Compute);
        Ok(self.analysis.insert(analysis))
    }

    /// Step 3 → step 1, discarding records, weights and results.
    pub fn new_analysis(&mut self) -> Result<()> {
        let to = self.ensure(WizardAction::NewAnalysis)?;
        self.records.clear();
        self.weights = None;
        self.analysis = None;
        self.draft_weights = self.default_weights;
        self.move_to(to, WizardAction::NewAnalysis);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> DestinationRecord {
        DestinationRecord::new(name, 10.0, 1000.0, 3, 4.0).unwrap()
    }

    #[test]
    fn test_continue_requires_records() {
        let mut session = SessionState::default();
        assert_eq!(
            session.continue_to_weights(),
            Err(WizardError::EmptyRecordSet)
        );
        assert_eq!(session.step(), WizardStep::CollectingDestinations);

        session.add_record(record("a")).unwrap();
        session.continue_to_weights().unwrap();
        assert_eq!(session.step(), WizardStep::CollectingWeights);
    }

    #[test]
    fn test_records_locked_outside_step_one() {
        let mut session = SessionState::default();
        session.add_record(record("a")).unwrap();
        session.continue_to_weights().unwrap();

        let err = session.add_record(record("b")).unwrap_err();
        assert_eq!(
            err,
            WizardError::InvalidTransition {
                from: WizardStep::CollectingWeights,
                action: WizardAction::EditRecords,
            }
        );
        assert_eq!(session.records().len(), 1);
        assert!(session.load_sample().is_err());
    }

    #[test]
    fn test_compute_rejects_bad_total_and_keeps_step() {
        let mut session = SessionState::default();
        session.add_record(record("a")).unwrap();
        session.continue_to_weights().unwrap();
        session
            .set_weights(WeightPercentages::new(40.0, 40.0, 40.0, 40.0))
            .unwrap();

        let err = session.compute().unwrap_err();
        assert_eq!(
            err,
            WizardError::invalid_weights("weights must total exactly 100%, currently 160%")
        );
        assert_eq!(session.step(), WizardStep::CollectingWeights);
        assert!(session.analysis().is_none());
        assert!(session.weights().is_none());
    }

    #[test]
    fn test_set_weights_rejects_out_of_range_and_keeps_draft() {
        let mut session = SessionState::default();
        session.add_record(record("a")).unwrap();
        session.continue_to_weights().unwrap();

        assert!(session
            .set_weights(WeightPercentages::new(150.0, -50.0, 0.0, 0.0))
            .is_err());
        assert_eq!(*session.draft_weights(), WeightPercentages::default());
    }

    #[test]
    fn test_back_retains_draft_weights() {
        let mut session = SessionState::default();
        session.add_record(record("a")).unwrap();
        session.continue_to_weights().unwrap();
        let draft = WeightPercentages::new(10.0, 20.0, 30.0, 40.0);
        session.set_weights(draft).unwrap();
        session.back().unwrap();

        assert_eq!(session.step(), WizardStep::CollectingDestinations);
        assert_eq!(*session.draft_weights(), draft);
    }

    #[test]
    fn test_full_cycle_and_reset() {
        let mut session = SessionState::default();
        session.load_sample().unwrap();
        session.continue_to_weights().unwrap();
        let top = session
            .compute()
            .unwrap()
            .recommended()
            .unwrap()
            .record
            .name()
            .to_string();
        assert_eq!(top, "Pemandian Alam Sembabe");
        assert_eq!(session.step(), WizardStep::ShowingResults);
        assert!(session.weights().is_some());

        assert!(session.back().is_err());
        session.new_analysis().unwrap();
        assert_eq!(session, SessionState::default());
    }

    #[test]
    fn test_new_analysis_only_from_results() {
        let mut session = SessionState::default();
        assert!(matches!(
            session.new_analysis(),
            Err(WizardError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_replace_records_with_empty_clears() {
        let mut session = SessionState::default();
        session.add_record(record("a")).unwrap();
        assert_eq!(session.replace_records(Vec::new()).unwrap(), 0);
        assert!(session.records().is_empty());
    }
}
