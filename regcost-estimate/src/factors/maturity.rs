use regcost_core::config::EstimationConfig;
use regcost_core::models::TechMaturity;

/// Tech-maturity factor for system and infrastructure work.
/// LOW maturity costs more, HIGH maturity less, MEDIUM is neutral.
pub fn calculate(maturity: TechMaturity, config: &EstimationConfig) -> f64 {
    match maturity {
        TechMaturity::Low => config.low_maturity_multiplier,
        TechMaturity::Medium => 1.0,
        TechMaturity::High => config.high_maturity_multiplier,
    }
}
