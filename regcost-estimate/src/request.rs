//! Request and response records for one estimate.

use regcost_calibration::CalibrationBreakdown;
use regcost_core::models::{
    CompanyProfile, CostDriver, CostEstimateResult, DriverOrigin, HistoricalVariance,
    PartialProfile, ScenarioAnalysis,
};
use serde::{Deserialize, Serialize};

/// Everything needed to estimate one (customer, regulation) pair.
///
/// History and drivers arrive already fetched; the engine performs no I/O.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimateRequest {
    pub drivers: Vec<CostDriver>,
    #[serde(default)]
    pub profile: PartialProfile,
    #[serde(default)]
    pub historical_variances: Vec<HistoricalVariance>,
    #[serde(default)]
    pub driver_origin: DriverOrigin,
}

/// Full estimate output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub result: CostEstimateResult,
    pub profile: CompanyProfile,
    pub scenarios: ScenarioAnalysis,
    /// Present when usable history was applied.
    pub calibration: Option<CalibrationBreakdown>,
    pub input_fingerprint: String,
}
