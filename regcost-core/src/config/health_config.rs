use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Industry;

/// Health score composer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Number of trend points kept, current score included.
    pub trend_window: usize,
    /// Cost predictability reported when the customer has no estimates.
    pub default_cost_predictability: f64,
    /// Exposure (currency units) that costs one score point.
    pub exposure_per_point: f64,
    /// Trend deltas within this band count as stable.
    pub trend_stable_band: u8,
    /// Industry wire name to benchmark score.
    pub industry_benchmarks: BTreeMap<String, u8>,
}

impl HealthConfig {
    pub fn benchmark_for(&self, industry: Industry) -> Option<u8> {
        self.industry_benchmarks.get(industry.as_str()).copied()
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            trend_window: defaults::DEFAULT_TREND_WINDOW,
            default_cost_predictability: defaults::DEFAULT_COST_PREDICTABILITY,
            exposure_per_point: defaults::DEFAULT_EXPOSURE_PER_POINT,
            trend_stable_band: defaults::DEFAULT_TREND_STABLE_BAND,
            industry_benchmarks: defaults::DEFAULT_INDUSTRY_BENCHMARKS
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }
}
