use serde::{Deserialize, Serialize};

use super::defaults;

/// Scenario generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Late penalty for the 90-day delay scenario, as a share of one-time cost.
    pub delay_penalty_rate: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            delay_penalty_rate: defaults::DEFAULT_DELAY_PENALTY_RATE,
        }
    }
}
