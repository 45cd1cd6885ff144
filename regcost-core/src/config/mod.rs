pub mod calibration_config;
pub mod defaults;
pub mod estimation_config;
pub mod health_config;
pub mod observability_config;
pub mod scenario_config;

pub use calibration_config::CalibrationConfig;
pub use estimation_config::EstimationConfig;
pub use health_config::HealthConfig;
pub use observability_config::ObservabilityConfig;
pub use scenario_config::ScenarioConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{RegcostError, RegcostResult};
use crate::models::Industry;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegcostConfig {
    pub estimation: EstimationConfig,
    pub scenario: ScenarioConfig,
    pub calibration: CalibrationConfig,
    pub health: HealthConfig,
    pub observability: ObservabilityConfig,
}

impl RegcostConfig {
    /// Parse from a TOML string and validate. An empty string yields all defaults.
    pub fn from_toml(input: &str) -> RegcostResult<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| RegcostError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tunable for a sensible range.
    pub fn validate(&self) -> RegcostResult<()> {
        let est = &self.estimation;
        positive("estimation.cost_per_fte", est.cost_per_fte)?;
        unit_interval("estimation.low_spread", est.low_spread)?;
        non_negative("estimation.high_spread", est.high_spread)?;
        non_negative("estimation.geographic_step", est.geographic_step)?;
        positive("estimation.low_maturity_multiplier", est.low_maturity_multiplier)?;
        positive("estimation.high_maturity_multiplier", est.high_maturity_multiplier)?;
        unit_interval("estimation.empty_confidence", est.empty_confidence)?;

        non_negative("scenario.delay_penalty_rate", self.scenario.delay_penalty_rate)?;

        let cal = &self.calibration;
        non_negative("calibration.spread_threshold", cal.spread_threshold)?;
        positive("calibration.shrinkage_samples", cal.shrinkage_samples)?;
        unit_interval("calibration.max_mean_shift", cal.max_mean_shift)?;
        unit_interval(
            "calibration.per_sample_confidence_delta",
            cal.per_sample_confidence_delta,
        )?;
        unit_interval("calibration.max_confidence_delta", cal.max_confidence_delta)?;
        unit_interval("calibration.confidence_floor", cal.confidence_floor)?;

        let health = &self.health;
        if health.trend_window == 0 {
            return Err(RegcostError::ConfigError(
                "health.trend_window must be at least 1".into(),
            ));
        }
        if !(0.0..=100.0).contains(&health.default_cost_predictability) {
            return Err(RegcostError::ConfigError(format!(
                "health.default_cost_predictability must be within [0, 100], got {}",
                health.default_cost_predictability
            )));
        }
        positive("health.exposure_per_point", health.exposure_per_point)?;
        for (industry, score) in &health.industry_benchmarks {
            industry
                .parse::<Industry>()
                .map_err(|e| RegcostError::ConfigError(e.to_string()))?;
            if *score > 100 {
                return Err(RegcostError::ConfigError(format!(
                    "health.industry_benchmarks.{industry} must be at most 100, got {score}"
                )));
            }
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> RegcostResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RegcostError::ConfigError(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn non_negative(name: &str, value: f64) -> RegcostResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RegcostError::ConfigError(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}

fn unit_interval(name: &str, value: f64) -> RegcostResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RegcostError::ConfigError(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}
