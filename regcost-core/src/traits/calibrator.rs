use crate::models::{CalibratedRange, CostEstimateResult, HistoricalVariance};

/// Learning feedback from a customer's past estimate outcomes.
pub trait ICalibrator: Send + Sync {
    /// Adjust the one-time range and confidence. Empty history returns the
    /// base values unchanged.
    fn calibrate(
        &self,
        base: &CostEstimateResult,
        history: &[HistoricalVariance],
    ) -> CalibratedRange;
}
