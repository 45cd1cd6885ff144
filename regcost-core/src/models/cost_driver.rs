use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{CostCategory, Department};
use crate::errors::ValidationError;

/// A discrete, attributable cause of compliance cost.
///
/// Drivers are read-only inputs; the engine never mutates or reorders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostDriver {
    pub id: String,
    pub category: CostCategory,
    #[serde(default)]
    pub description: String,
    pub is_one_time: bool,
    /// Whole currency units.
    pub estimated_cost: f64,
    /// Classifier confidence in [0, 1].
    pub confidence: f64,
    #[serde(default)]
    pub department: Department,
}

impl CostDriver {
    /// Reject negative or non-finite costs and confidences outside [0, 1].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.estimated_cost.is_finite() {
            return Err(ValidationError::NonFiniteCost {
                driver_id: self.id.clone(),
            });
        }
        if self.estimated_cost < 0.0 {
            return Err(ValidationError::NegativeCost {
                driver_id: self.id.clone(),
                cost: self.estimated_cost,
            });
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(ValidationError::ConfidenceOutOfRange {
                driver_id: self.id.clone(),
                confidence: self.confidence,
            });
        }
        Ok(())
    }
}

/// Where a driver list came from. Drivers classified by a model are tagged
/// so the resulting estimate reports `AI_CALIBRATED`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverOrigin {
    #[default]
    Manual,
    ModelClassified,
}
