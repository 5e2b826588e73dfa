use crate::errors::{Result, WizardError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Allowed facility scores (integer scale).
pub const FACILITY_RANGE: RangeInclusive<u8> = 1..=5;

/// Allowed visitor ratings.
pub const RATING_RANGE: RangeInclusive<f64> = 1.0..=5.0;

/// Whether a higher raw value is better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    /// Higher is better; divided by the column maximum
    Benefit,
    /// Lower is better; column minimum divided by the value
    Cost,
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Benefit => write!(f, "benefit"),
            Self::Cost => write!(f, "cost"),
        }
    }
}

/// The four decision criteria, in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Distance,
    Cost,
    Facility,
    Rating,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::Distance,
        Criterion::Cost,
        Criterion::Facility,
        Criterion::Rating,
    ];

    pub fn kind(self) -> CriterionKind {
        match self {
            Self::Distance | Self::Cost => CriterionKind::Cost,
            Self::Facility | Self::Rating => CriterionKind::Benefit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Distance => "Distance",
            Self::Cost => "Cost",
            Self::Facility => "Facility",
            Self::Rating => "Rating",
        }
    }

    /// Column header used by the import/export file format.
    pub fn column_header(self) -> &'static str {
        match self {
            Self::Distance => "Jarak (km)",
            Self::Cost => "Biaya (ribu Rp)",
            Self::Facility => "Fasilitas (1-5)",
            Self::Rating => "Rating (1-5)",
        }
    }

    /// English header accepted as an alternative on import.
    pub fn column_alias(self) -> &'static str {
        match self {
            Self::Distance => "Distance (km)",
            Self::Cost => "Cost",
            Self::Facility => "Facility (1-5)",
            Self::Rating => "Rating (1-5)",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated tourism destination.
///
/// Fields are private: the only way to build one is through
/// [`DestinationRecord::new`], so every instance satisfies
/// `distance_km > 0`, `cost > 0`, `facility ∈ 1..=5` and `rating ∈ [1, 5]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationRecord {
    name: String,
    distance_km: f64,
    cost: f64,
    facility: u8,
    rating: f64,
}

impl DestinationRecord {
    pub fn new(
        name: impl Into<String>,
        distance_km: f64,
        cost: f64,
        facility: u8,
        rating: f64,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(WizardError::invalid_field("destination name must not be empty"));
        }
        validate_positive("distance", distance_km)?;
        validate_positive("cost", cost)?;
        if !FACILITY_RANGE.contains(&facility) {
            return Err(WizardError::invalid_field(format!(
                "facility must be between {} and {}, got {facility}",
                FACILITY_RANGE.start(),
                FACILITY_RANGE.end()
            )));
        }
        if !rating.is_finite() || !RATING_RANGE.contains(&rating) {
            return Err(WizardError::invalid_field(format!(
                "rating must be between {:.1} and {:.1}, got {rating}",
                RATING_RANGE.start(),
                RATING_RANGE.end()
            )));
        }

        Ok(Self {
            name,
            distance_km,
            cost,
            facility,
            rating,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn facility(&self) -> u8 {
        self.facility
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Raw value of a criterion as a float.
    pub fn value(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Distance => self.distance_km,
            Criterion::Cost => self.cost,
            Criterion::Facility => f64::from(self.facility),
            Criterion::Rating => self.rating,
        }
    }
}

fn validate_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WizardError::invalid_field(format!(
            "{field} must be greater than 0, got {value}"
        )))
    }
}

/// A record rescaled to dimensionless [0, 1] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub name: String,
    pub distance: f64,
    pub cost: f64,
    pub facility: f64,
    pub rating: f64,
}

impl NormalizedRecord {
    pub fn value(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Distance => self.distance,
            Criterion::Cost => self.cost,
            Criterion::Facility => self.facility,
            Criterion::Rating => self.rating,
        }
    }
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    /// 1-based position after a stable descending sort
    pub rank: usize,
    /// Position of the record in the input collection
    pub index: usize,
    pub record: DestinationRecord,
    pub score: f64,
}
