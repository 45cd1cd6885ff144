//! HealthScoreComposer: implements IHealthScorer, combines the component
//! signals into the composite score and trend.

use regcost_core::config::HealthConfig;
use regcost_core::constants::{
    SCORE_MAX, SCORE_MIN, WEIGHT_COST_PREDICTABILITY, WEIGHT_DEADLINE_ADHERENCE,
    WEIGHT_RISK_EXPOSURE_INVERSE,
};
use regcost_core::models::{ComplianceHealthScore, HealthComponents, TrendPoint};
use regcost_core::traits::IHealthScorer;
use regcost_observability::health_span;
use tracing::{debug, info};

use crate::components::{cost_predictability, deadline_adherence, risk_exposure_inverse};
use crate::inputs::HealthInputs;
use crate::trend::{build_trend, trend_direction};

/// `round(0.4 × deadline + 0.4 × predictability + 0.2 × exposure_inverse)`.
///
/// Components are clamped to [0, 100] first, so the result always is too.
pub fn compute_health_score(components: HealthComponents) -> u8 {
    let c = components.clamped();
    let weighted = c.deadline_adherence * WEIGHT_DEADLINE_ADHERENCE
        + c.cost_predictability * WEIGHT_COST_PREDICTABILITY
        + c.risk_exposure_inverse * WEIGHT_RISK_EXPOSURE_INVERSE;
    weighted.round().clamp(SCORE_MIN, SCORE_MAX) as u8
}

/// Health score composer. Stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct HealthScoreComposer {
    config: HealthConfig,
}

impl HealthScoreComposer {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom configuration.
    pub fn with_config(config: HealthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HealthConfig {
        &self.config
    }

    /// Derive the three component signals.
    pub fn components(&self, inputs: &HealthInputs) -> HealthComponents {
        if inputs.estimates.is_empty() {
            debug!(
                default = self.config.default_cost_predictability,
                "no estimates, using default cost predictability"
            );
        }
        HealthComponents {
            deadline_adherence: deadline_adherence(&inputs.deadlines, inputs.as_of),
            cost_predictability: cost_predictability(
                &inputs.estimates,
                self.config.default_cost_predictability,
            ),
            risk_exposure_inverse: risk_exposure_inverse(
                inputs.total_exposure,
                self.config.exposure_per_point,
            ),
        }
        .clamped()
    }

    /// Full composition: components, score, trend, direction, benchmark.
    pub fn compose(&self, inputs: &HealthInputs) -> ComplianceHealthScore {
        let _span = health_span!(inputs.period_label).entered();

        let components = self.components(inputs);
        let score = compute_health_score(components);

        let current = TrendPoint {
            label: inputs.period_label.clone(),
            score,
        };
        let trend = build_trend(&inputs.prior_trend, current, self.config.trend_window);
        let direction = trend_direction(&trend, self.config.trend_stable_band);
        let industry_benchmark = inputs
            .industry
            .and_then(|industry| self.config.benchmark_for(industry));

        info!(
            score,
            deadline_adherence = components.deadline_adherence,
            cost_predictability = components.cost_predictability,
            risk_exposure_inverse = components.risk_exposure_inverse,
            trend_direction = ?direction,
            "health score computed"
        );

        ComplianceHealthScore {
            score,
            components,
            trend,
            trend_direction: direction,
            industry_benchmark,
        }
    }
}

impl IHealthScorer for HealthScoreComposer {
    fn score(&self, components: HealthComponents) -> u8 {
        compute_health_score(components)
    }
}
