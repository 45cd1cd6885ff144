use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Department;

/// Cost calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationConfig {
    /// Annual recurring cost that equals one full-time equivalent.
    pub cost_per_fte: f64,
    /// How far (1 - confidence) pulls a driver's low bound down.
    pub low_spread: f64,
    /// How far (1 - confidence) pushes a driver's high bound up.
    pub high_spread: f64,
    /// Added multiplier per jurisdiction beyond the first.
    pub geographic_step: f64,
    /// Tech-bound category multiplier for LOW maturity.
    pub low_maturity_multiplier: f64,
    /// Tech-bound category multiplier for HIGH maturity.
    pub high_maturity_multiplier: f64,
    /// Confidence reported when there are no drivers.
    pub empty_confidence: f64,
    /// Department wire name (e.g. "HR") to budget code.
    pub budget_codes: BTreeMap<String, String>,
}

impl EstimationConfig {
    pub fn budget_code(&self, department: Department) -> Option<String> {
        self.budget_codes.get(department.as_str()).cloned()
    }
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            cost_per_fte: defaults::DEFAULT_COST_PER_FTE,
            low_spread: defaults::DEFAULT_LOW_SPREAD,
            high_spread: defaults::DEFAULT_HIGH_SPREAD,
            geographic_step: defaults::DEFAULT_GEOGRAPHIC_STEP,
            low_maturity_multiplier: defaults::DEFAULT_LOW_MATURITY_MULTIPLIER,
            high_maturity_multiplier: defaults::DEFAULT_HIGH_MATURITY_MULTIPLIER,
            empty_confidence: defaults::DEFAULT_EMPTY_CONFIDENCE,
            budget_codes: BTreeMap::new(),
        }
    }
}
