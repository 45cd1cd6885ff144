//! EstimationEngine: orchestrates resolve → calculate → calibrate → scenarios.

use rayon::prelude::*;
use regcost_calibration::CalibrationEngine;
use regcost_core::config::RegcostConfig;
use regcost_core::errors::RegcostResult;
use regcost_core::models::{DriverOrigin, EstimationMethod, HistoricalVariance, PartialProfile};
use regcost_core::traits::{ICostCalculator, ICostDriverSource};
use regcost_observability::estimate_span;
use tracing::info;

use crate::calculator::CostCalculator;
use crate::fingerprint;
use crate::profile::resolve_profile;
use crate::request::{CostEstimate, CostEstimateRequest};
use crate::scenarios::ScenarioGenerator;

/// The main estimation engine.
///
/// Holds configuration only; every call depends solely on its arguments,
/// so one engine can be shared across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct EstimationEngine {
    calculator: CostCalculator,
    calibrator: CalibrationEngine,
    scenarios: ScenarioGenerator,
}

impl EstimationEngine {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a loaded configuration.
    pub fn with_config(config: &RegcostConfig) -> Self {
        Self {
            calculator: CostCalculator::with_config(config.estimation.clone()),
            calibrator: CalibrationEngine::with_config(config.calibration.clone()),
            scenarios: ScenarioGenerator::with_config(config.scenario.clone()),
        }
    }

    /// Full estimation pipeline for one request.
    pub fn estimate(&self, request: &CostEstimateRequest) -> RegcostResult<CostEstimate> {
        let _span = estimate_span!(request.drivers.len()).entered();

        // Step 1: Resolve the company profile.
        let profile = resolve_profile(&request.profile)?;

        // Step 2: Deterministic calculation.
        let mut result = self.calculator.calculate(&request.drivers, &profile)?;
        if request.driver_origin == DriverOrigin::ModelClassified {
            result.estimation_method = EstimationMethod::AiCalibrated;
        }

        // Step 3: Learning feedback from history.
        let (result, calibration) = self
            .calibrator
            .apply_to(&result, &request.historical_variances);

        // Step 4: Scenarios from the calibrated range.
        let scenarios = self.scenarios.generate(&result, &profile);

        let input_fingerprint = fingerprint::compute(
            &request.drivers,
            &profile,
            &request.historical_variances,
            request.driver_origin,
        );

        info!(
            one_time_low = result.one_time_cost_low,
            one_time_high = result.one_time_cost_high,
            recurring = result.recurring_cost_annual,
            confidence = result.confidence.value(),
            method = ?result.estimation_method,
            recommended = %scenarios.recommended,
            "estimate computed"
        );

        Ok(CostEstimate {
            result,
            profile,
            scenarios,
            calibration,
            input_fingerprint,
        })
    }

    /// Estimate many independent requests in parallel.
    /// Results are returned in input order; one failure does not affect the others.
    pub fn estimate_batch(
        &self,
        requests: &[CostEstimateRequest],
    ) -> Vec<RegcostResult<CostEstimate>> {
        requests.par_iter().map(|r| self.estimate(r)).collect()
    }

    /// Fetch drivers from an upstream source, then estimate.
    pub fn estimate_from_source(
        &self,
        source: &dyn ICostDriverSource,
        regulation_id: &str,
        profile: PartialProfile,
        historical_variances: Vec<HistoricalVariance>,
    ) -> RegcostResult<CostEstimate> {
        let drivers = source.drivers(regulation_id)?;
        self.estimate(&CostEstimateRequest {
            drivers,
            profile,
            historical_variances,
            driver_origin: source.origin(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regcost_core::models::{CostCategory, CostDriver, Department};

    fn request() -> CostEstimateRequest {
        CostEstimateRequest {
            drivers: vec![CostDriver {
                id: "d1".into(),
                category: CostCategory::LegalReview,
                description: "gap analysis".into(),
                is_one_time: true,
                estimated_cost: 25_000.0,
                confidence: 0.75,
                department: Department::Legal,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn manual_drivers_are_deterministic() {
        let est = EstimationEngine::new().estimate(&request()).unwrap();
        assert_eq!(est.result.estimation_method, EstimationMethod::Deterministic);
        assert!(est.calibration.is_none());
    }

    #[test]
    fn model_drivers_are_ai_calibrated() {
        let mut req = request();
        req.driver_origin = DriverOrigin::ModelClassified;
        let est = EstimationEngine::new().estimate(&req).unwrap();
        assert_eq!(est.result.estimation_method, EstimationMethod::AiCalibrated);
    }

    #[test]
    fn history_overrides_method() {
        let mut req = request();
        req.driver_origin = DriverOrigin::ModelClassified;
        req.historical_variances = vec![HistoricalVariance::from_outcome(100.0, 105.0).unwrap()];
        let est = EstimationEngine::new().estimate(&req).unwrap();
        assert_eq!(est.result.estimation_method, EstimationMethod::HistoricalAdjusted);
        assert!(est.calibration.is_some());
    }

    #[test]
    fn invalid_profile_is_rejected() {
        let mut req = request();
        req.profile.employee_count = Some(0);
        assert!(EstimationEngine::new().estimate(&req).is_err());
    }
}
