use crate::errors::RegcostResult;
use crate::models::{CompanyProfile, CostDriver, CostEstimateResult};

/// Deterministic cost computation from classified drivers.
pub trait ICostCalculator: Send + Sync {
    /// Compute the cost range, department breakdown, and base confidence.
    /// Fails only with a validation error.
    fn calculate(
        &self,
        drivers: &[CostDriver],
        profile: &CompanyProfile,
    ) -> RegcostResult<CostEstimateResult>;
}
