use crate::core::Criterion;
use crate::errors::{Result, WizardError};
use crate::formatting::format_percent;
use serde::{Deserialize, Serialize};

/// Tolerance used when checking that weights add up.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Required total of the percentage weights.
pub const PERCENT_TOTAL: f64 = 100.0;

/// Weights as entered by the user, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPercentages {
    #[serde(default = "default_distance_percent")]
    pub distance: f64,
    #[serde(default = "default_cost_percent")]
    pub cost: f64,
    #[serde(default = "default_facility_percent")]
    pub facility: f64,
    #[serde(default = "default_rating_percent")]
    pub rating: f64,
}

pub fn default_distance_percent() -> f64 {
    30.0
}

pub fn default_cost_percent() -> f64 {
    25.0
}

pub fn default_facility_percent() -> f64 {
    20.0
}

pub fn default_rating_percent() -> f64 {
    25.0
}

impl Default for WeightPercentages {
    fn default() -> Self {
        Self {
            distance: default_distance_percent(),
            cost: default_cost_percent(),
            facility: default_facility_percent(),
            rating: default_rating_percent(),
        }
    }
}

impl WeightPercentages {
    pub fn new(distance: f64, cost: f64, facility: f64, rating: f64) -> Self {
        Self {
            distance,
            cost,
            facility,
            rating,
        }
    }

    /// Build from a slice in canonical criterion order.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            [distance, cost, facility, rating] => {
                Ok(Self::new(*distance, *cost, *facility, *rating))
            }
            _ => Err(WizardError::invalid_weights(format!(
                "expected 4 weights (distance, cost, facility, rating), got {}",
                values.len()
            ))),
        }
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Distance => self.distance,
            Criterion::Cost => self.cost,
            Criterion::Facility => self.facility,
            Criterion::Rating => self.rating,
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.distance, self.cost, self.facility, self.rating]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    pub fn sums_to_hundred(&self) -> bool {
        (self.total() - PERCENT_TOTAL).abs() <= WEIGHT_TOLERANCE
    }

    // Pure function: Validate a single percentage with name
    fn validate_percent(value: f64, criterion: Criterion) -> Result<()> {
        if value.is_finite() && (0.0..=PERCENT_TOTAL).contains(&value) {
            Ok(())
        } else {
            Err(WizardError::invalid_weights(format!(
                "{} weight must be between 0 and 100, got {value}",
                criterion.label()
            )))
        }
    }

    /// Check that every weight lies in [0, 100]. The total is not checked.
    pub fn validate_ranges(&self) -> Result<()> {
        Criterion::ALL
            .iter()
            .try_for_each(|&criterion| Self::validate_percent(self.get(criterion), criterion))
    }

    /// Check ranges and that the total is exactly 100.
    pub fn validate(&self) -> Result<()> {
        self.validate_ranges()?;
        if self.sums_to_hundred() {
            Ok(())
        } else {
            Err(WizardError::invalid_weights(format!(
                "weights must total exactly 100%, currently {}%",
                format_percent(self.total())
            )))
        }
    }
}

/// Committed weights as fractions of 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriteriaWeights {
    distance: f64,
    cost: f64,
    facility: f64,
    rating: f64,
}

impl CriteriaWeights {
    /// Commit percentages, dividing each by 100.
    pub fn from_percentages(percentages: &WeightPercentages) -> Result<Self> {
        percentages.validate()?;
        let [distance, cost, facility, rating] =
            percentages.as_array().map(|p| p / PERCENT_TOTAL);
        Ok(Self {
            distance,
            cost,
            facility,
            rating,
        })
    }

    /// Build directly from fractions; they must be non-negative and sum to 1.0.
    pub fn from_fractions(distance: f64, cost: f64, facility: f64, rating: f64) -> Result<Self> {
        let weights = Self {
            distance,
            cost,
            facility,
            rating,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Distance => self.distance,
            Criterion::Cost => self.cost,
            Criterion::Facility => self.facility,
            Criterion::Rating => self.rating,
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.distance, self.cost, self.facility, self.rating]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Fractions must be finite, non-negative and sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        if let Some(criterion) = Criterion::ALL
            .into_iter()
            .find(|&c| !(self.get(c).is_finite() && self.get(c) >= 0.0))
        {
            return Err(WizardError::invalid_weights(format!(
                "{} weight must be a non-negative number, got {}",
                criterion.label(),
                self.get(criterion)
            )));
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(WizardError::invalid_weights(format!(
                "weights must sum to 1.0, but sum to {sum:.6}"
            )));
        }
        Ok(())
    }

    /// Back to percentages, for display.
    pub fn to_percentages(&self) -> WeightPercentages {
        let [distance, cost, facility, rating] = self.as_array().map(|w| w * PERCENT_TOTAL);
        WeightPercentages::new(distance, cost, facility, rating)
    }
}
