//! Scenario generation: four fixed multiplier sets against the base cost.

use regcost_core::config::ScenarioConfig;
use regcost_core::constants::{
    BEST_IN_CLASS_MULTIPLIERS, DELAY_MULTIPLIERS, MINIMAL_MULTIPLIERS, SCENARIO_HORIZON_YEARS,
    STANDARD_MULTIPLIERS,
};
use regcost_core::models::{
    CompanyProfile, CostEstimateResult, CostScenario, RiskLevel, ScenarioAnalysis, ScenarioName,
};
use regcost_observability::scenario_span;
use tracing::debug;

/// Scenario generator. Stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct ScenarioGenerator {
    config: ScenarioConfig,
}

impl ScenarioGenerator {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom configuration.
    pub fn with_config(config: ScenarioConfig) -> Self {
        Self { config }
    }

    /// Derive all four scenarios from the base estimate's one-time midpoint and
    /// recurring cost, then pick the cheapest one within the risk appetite.
    pub fn generate(
        &self,
        base: &CostEstimateResult,
        profile: &CompanyProfile,
    ) -> ScenarioAnalysis {
        let _span = scenario_span!(profile.risk_appetite).entered();
        let one_time = base.one_time_midpoint();
        let recurring = base.recurring_cost_annual;
        let appetite = profile.risk_appetite;

        let scenarios: Vec<CostScenario> = ScenarioName::ALL
            .into_iter()
            .map(|name| self.build(name, one_time, recurring, appetite))
            .collect();

        let recommended = recommend(&scenarios, appetite);
        debug!(%recommended, "scenarios generated");

        ScenarioAnalysis {
            scenarios,
            recommended,
        }
    }

    fn build(
        &self,
        name: ScenarioName,
        one_time: f64,
        recurring: f64,
        appetite: RiskLevel,
    ) -> CostScenario {
        let penalty_pct = self.config.delay_penalty_rate * 100.0;
        let (multipliers, risk_level, description, assumptions) = match name {
            ScenarioName::Minimal => (
                MINIMAL_MULTIPLIERS,
                appetite.raised(),
                "Meet the letter of the regulation with the smallest viable program.",
                vec![
                    "Manual controls replace most tooling".to_string(),
                    "Training limited to directly affected staff".to_string(),
                    "Higher residual risk of audit findings".to_string(),
                ],
            ),
            ScenarioName::Standard => (
                STANDARD_MULTIPLIERS,
                appetite,
                "Implement the estimated program as scoped.",
                vec![
                    "All identified cost drivers are addressed".to_string(),
                    "Timeline meets the regulatory deadline".to_string(),
                ],
            ),
            ScenarioName::BestInClass => (
                BEST_IN_CLASS_MULTIPLIERS,
                appetite.lowered(),
                "Exceed the requirement with automation and continuous monitoring.",
                vec![
                    "Automated evidence collection and monitoring".to_string(),
                    "Organization-wide training program".to_string(),
                    "External assurance review before the deadline".to_string(),
                ],
            ),
            ScenarioName::Delay90Days => (
                DELAY_MULTIPLIERS,
                RiskLevel::High,
                "Start implementation 90 days late and absorb the late penalty.",
                vec![
                    format!("Late penalty of {penalty_pct:.0}% of one-time cost"),
                    "Regulatory exposure during the gap period".to_string(),
                ],
            ),
        };

        let (one_time_mult, recurring_mult) = multipliers;
        let mut scenario_one_time = one_time * one_time_mult;
        if name == ScenarioName::Delay90Days {
            scenario_one_time += one_time * self.config.delay_penalty_rate;
        }
        let scenario_recurring = recurring * recurring_mult;

        CostScenario {
            name,
            description: description.to_string(),
            one_time_cost: scenario_one_time,
            recurring_cost_annual: scenario_recurring,
            three_year_total: scenario_one_time + scenario_recurring * SCENARIO_HORIZON_YEARS,
            risk_level,
            assumptions,
        }
    }
}

/// Cheapest three-year total among scenarios no riskier than the appetite.
/// Ties go to the earlier scenario; falls back to `Standard`.
fn recommend(scenarios: &[CostScenario], appetite: RiskLevel) -> ScenarioName {
    scenarios
        .iter()
        .filter(|s| s.risk_level <= appetite)
        .fold(None::<&CostScenario>, |best, s| match best {
            Some(b) if b.three_year_total <= s.three_year_total => Some(b),
            _ => Some(s),
        })
        .map(|s| s.name)
        .unwrap_or(ScenarioName::Standard)
}

/// Generate scenarios with the default configuration.
pub fn generate_scenarios(base: &CostEstimateResult, profile: &CompanyProfile) -> ScenarioAnalysis {
    ScenarioGenerator::new().generate(base, profile)
}
