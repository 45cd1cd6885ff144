//! Deterministic cost calculation from classified drivers and a company profile.

use regcost_core::config::EstimationConfig;
use regcost_core::errors::{RegcostResult, ValidationError};
use regcost_core::models::{
    CompanyProfile, Confidence, CostDriver, CostEstimateResult, EstimationMethod,
};
use regcost_core::traits::ICostCalculator;
use tracing::{debug, warn};

use crate::aggregation::{self, fte_impact};
use crate::factors::Multipliers;

/// Cost calculator. Stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct CostCalculator {
    config: EstimationConfig,
}

impl CostCalculator {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom configuration.
    pub fn with_config(config: EstimationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimationConfig {
        &self.config
    }

    /// Full pipeline:
    ///
    /// 1. validate every driver (first failure wins)
    /// 2. aggregate by department
    /// 3. adjust each line item by the company multipliers
    /// 4. per driver, `low = adj × (1 - low_spread × (1 - c))`,
    ///    `high = adj × (1 + high_spread × (1 - c))`
    /// 5. confidence = mean driver confidence, or the empty default
    fn compute(
        &self,
        drivers: &[CostDriver],
        profile: &CompanyProfile,
    ) -> RegcostResult<CostEstimateResult> {
        for driver in drivers {
            driver.validate()?;
        }

        let multipliers = Multipliers::for_profile(profile, &self.config);
        debug!(
            size = multipliers.size,
            geographic = multipliers.geographic,
            tech_maturity = multipliers.tech_maturity,
            "company multipliers resolved"
        );

        let mut buckets = aggregation::aggregate_with_config(drivers, &self.config);

        let mut low = 0.0;
        let mut high = 0.0;
        let mut recurring = 0.0;

        for bucket in buckets.values_mut() {
            let mut bucket_one_time = 0.0;
            let mut bucket_recurring = 0.0;

            for driver in &bucket.line_items {
                let uncertainty = 1.0 - driver.confidence;
                if driver.is_one_time {
                    let adjusted = multipliers.one_time(driver);
                    bucket_one_time += adjusted;
                    low += adjusted * (1.0 - self.config.low_spread * uncertainty).max(0.0);
                    high += adjusted * (1.0 + self.config.high_spread * uncertainty);
                } else {
                    let adjusted = multipliers.recurring(driver);
                    bucket_recurring += adjusted;
                    recurring += adjusted;
                }
            }

            bucket.one_time_cost = bucket_one_time;
            bucket.recurring_cost_annual = bucket_recurring;
            bucket.fte_impact = fte_impact(bucket_recurring, self.config.cost_per_fte);
        }

        let totals = [
            ("one-time low", low),
            ("one-time high", high),
            ("recurring", recurring),
        ];
        for (total, value) in totals {
            if !value.is_finite() {
                warn!(total, value, "adjusted cost total overflowed, rejecting input");
                return Err(ValidationError::CostOverflow { total }.into());
            }
        }

        if high < low {
            warn!(low, high, "one-time high below low, clamping");
            high = low;
        }

        let confidence = if drivers.is_empty() {
            debug!("no drivers supplied, using empty-input confidence");
            Confidence::new(self.config.empty_confidence)
        } else {
            let sum: f64 = drivers.iter().map(|d| d.confidence).sum();
            Confidence::new(sum / drivers.len() as f64)
        };

        Ok(CostEstimateResult {
            one_time_cost_low: low,
            one_time_cost_high: high,
            recurring_cost_annual: recurring,
            department_breakdown: buckets.into_values().collect(),
            estimation_method: EstimationMethod::Deterministic,
            confidence,
        })
    }
}

impl ICostCalculator for CostCalculator {
    fn calculate(
        &self,
        drivers: &[CostDriver],
        profile: &CompanyProfile,
    ) -> RegcostResult<CostEstimateResult> {
        self.compute(drivers, profile)
    }
}

/// Calculate with the default configuration.
pub fn calculate_implementation_cost(
    drivers: &[CostDriver],
    profile: &CompanyProfile,
) -> RegcostResult<CostEstimateResult> {
    CostCalculator::new().calculate(drivers, profile)
}
