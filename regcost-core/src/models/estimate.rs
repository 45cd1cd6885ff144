use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Confidence, CostDriver, Department};

/// How an estimate's range was produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimationMethod {
    #[default]
    Deterministic,
    AiCalibrated,
    HistoricalAdjusted,
}

/// Per-department rollup of one-time and recurring cost. Derived fresh each call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCostBreakdown {
    pub department: Department,
    pub one_time_cost: f64,
    pub recurring_cost_annual: f64,
    /// Full-time equivalents implied by the recurring cost.
    pub fte_impact: f64,
    pub budget_code: Option<String>,
    pub line_items: Vec<CostDriver>,
}

impl DepartmentCostBreakdown {
    pub fn empty(department: Department) -> Self {
        Self {
            department,
            one_time_cost: 0.0,
            recurring_cost_annual: 0.0,
            fte_impact: 0.0,
            budget_code: None,
            line_items: Vec::new(),
        }
    }
}

/// Calibrated-ready cost range with department attribution.
///
/// Invariant: `one_time_cost_low <= one_time_cost_high`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimateResult {
    pub one_time_cost_low: f64,
    pub one_time_cost_high: f64,
    pub recurring_cost_annual: f64,
    pub department_breakdown: Vec<DepartmentCostBreakdown>,
    pub estimation_method: EstimationMethod,
    pub confidence: Confidence,
}

impl CostEstimateResult {
    /// Midpoint of the one-time range.
    pub fn one_time_midpoint(&self) -> f64 {
        (self.one_time_cost_low + self.one_time_cost_high) / 2.0
    }

    /// Width of the one-time range.
    pub fn one_time_width(&self) -> f64 {
        self.one_time_cost_high - self.one_time_cost_low
    }

    /// The one-time bounds as stored for health scoring.
    pub fn range(&self) -> CostRange {
        CostRange {
            low: self.one_time_cost_low,
            high: self.one_time_cost_high,
        }
    }
}

/// A bare low/high pair, as stored for a customer's past estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostRange {
    pub low: f64,
    pub high: f64,
}

/// Output of learning feedback: the adjusted one-time range and confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalibratedRange {
    pub one_time_cost_low: f64,
    pub one_time_cost_high: f64,
    pub confidence: Confidence,
}

impl From<&CostEstimateResult> for CalibratedRange {
    fn from(r: &CostEstimateResult) -> Self {
        Self {
            one_time_cost_low: r.one_time_cost_low,
            one_time_cost_high: r.one_time_cost_high,
            confidence: r.confidence,
        }
    }
}
