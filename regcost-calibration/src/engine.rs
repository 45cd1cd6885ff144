//! CalibrationEngine: implements ICalibrator, orchestrates statistics →
//! range adjustment → confidence adjustment.

use regcost_core::config::CalibrationConfig;
use regcost_core::models::{
    CalibratedRange, CostEstimateResult, EstimationMethod, HistoricalVariance,
};
use regcost_core::traits::ICalibrator;
use regcost_observability::calibration_span;
use serde::Serialize;
use tracing::debug;

use crate::statistics::VarianceStats;
use crate::{confidence, range};

/// Every quantity that went into one calibration, for observability.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationBreakdown {
    pub sample_size: usize,
    pub mean_variance: f64,
    pub variance_spread: f64,
    pub weight: f64,
    pub shift: f64,
    pub widen: f64,
    pub widened: bool,
    pub confidence_before: f64,
    pub confidence_after: f64,
}

impl CalibrationBreakdown {
    pub fn confidence_delta(&self) -> f64 {
        self.confidence_after - self.confidence_before
    }
}

/// Learning-feedback engine. Stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct CalibrationEngine {
    config: CalibrationConfig,
}

impl CalibrationEngine {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom configuration.
    pub fn with_config(config: CalibrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Calibrate and report how. Returns `None` for the breakdown when the
    /// history holds no usable entries, in which case the range is the base.
    pub fn calibrate_with_breakdown(
        &self,
        base: &CostEstimateResult,
        history: &[HistoricalVariance],
    ) -> (CalibratedRange, Option<CalibrationBreakdown>) {
        let _span = calibration_span!(history.len()).entered();
        let unchanged = CalibratedRange::from(base);

        let Some(stats) = VarianceStats::from_history(history) else {
            debug!("no usable history, returning base range");
            return (unchanged, None);
        };

        let adj = range::adjust(
            base.one_time_cost_low,
            base.one_time_cost_high,
            &stats,
            &self.config,
        );
        let new_confidence = confidence::adjust(base.confidence, &stats, &self.config);

        let breakdown = CalibrationBreakdown {
            sample_size: stats.sample_size,
            mean_variance: stats.mean,
            variance_spread: stats.spread(),
            weight: stats.weight(self.config.shrinkage_samples),
            shift: adj.shift,
            widen: adj.widen,
            widened: adj.widened,
            confidence_before: base.confidence.value(),
            confidence_after: new_confidence.value(),
        };
        debug!(
            sample_size = breakdown.sample_size,
            mean_variance = breakdown.mean_variance,
            spread = breakdown.variance_spread,
            widened = breakdown.widened,
            confidence_delta = breakdown.confidence_delta(),
            "calibration applied"
        );

        (
            CalibratedRange {
                one_time_cost_low: adj.low,
                one_time_cost_high: adj.high,
                confidence: new_confidence,
            },
            Some(breakdown),
        )
    }

    /// Calibrate and fold the result back into a full estimate. The method
    /// becomes `HISTORICAL_ADJUSTED` only when usable history was applied.
    pub fn apply_to(
        &self,
        base: &CostEstimateResult,
        history: &[HistoricalVariance],
    ) -> (CostEstimateResult, Option<CalibrationBreakdown>) {
        let (range, breakdown) = self.calibrate_with_breakdown(base, history);
        let mut result = base.clone();
        if breakdown.is_some() {
            result.one_time_cost_low = range.one_time_cost_low;
            result.one_time_cost_high = range.one_time_cost_high;
            result.confidence = range.confidence;
            result.estimation_method = EstimationMethod::HistoricalAdjusted;
        }
        (result, breakdown)
    }
}

impl ICalibrator for CalibrationEngine {
    fn calibrate(
        &self,
        base: &CostEstimateResult,
        history: &[HistoricalVariance],
    ) -> CalibratedRange {
        self.calibrate_with_breakdown(base, history).0
    }
}

/// Apply learning feedback with the default configuration.
pub fn apply_learning_feedback(
    base: &CostEstimateResult,
    history: &[HistoricalVariance],
) -> CalibratedRange {
    CalibrationEngine::new().calibrate(base, history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regcost_core::models::Confidence;

    fn base() -> CostEstimateResult {
        CostEstimateResult {
            one_time_cost_low: 9_000.0,
            one_time_cost_high: 12_000.0,
            recurring_cost_annual: 3_000.0,
            department_breakdown: vec![],
            estimation_method: EstimationMethod::Deterministic,
            confidence: Confidence::new(0.7),
        }
    }

    #[test]
    fn empty_history_is_a_no_op() {
        let b = base();
        let range = apply_learning_feedback(&b, &[]);
        assert_eq!(range, CalibratedRange::from(&b));
    }

    #[test]
    fn apply_to_marks_historical_adjustment() {
        let engine = CalibrationEngine::new();
        let history = [HistoricalVariance::from_outcome(10_000.0, 11_000.0).unwrap()];
        let (result, breakdown) = engine.apply_to(&base(), &history);
        assert_eq!(result.estimation_method, EstimationMethod::HistoricalAdjusted);
        assert!(breakdown.is_some());
        assert_eq!(result.recurring_cost_annual, 3_000.0);
    }

    #[test]
    fn apply_to_with_unusable_history_keeps_method() {
        let engine = CalibrationEngine::new();
        let history = [HistoricalVariance {
            estimated: 0.0,
            actual: 10.0,
            variance: f64::NAN,
        }];
        let (result, breakdown) = engine.apply_to(&base(), &history);
        assert_eq!(result, base());
        assert!(breakdown.is_none());
    }

    #[test]
    fn underestimation_history_shifts_range_up() {
        let history: Vec<_> = (0..6)
            .map(|_| HistoricalVariance::from_outcome(10_000.0, 12_000.0).unwrap())
            .collect();
        let range = apply_learning_feedback(&base(), &history);
        assert!(range.one_time_cost_low > 9_000.0);
        assert!(range.one_time_cost_high > 12_000.0);
        assert!(range.confidence.value() > 0.7);
    }
}
