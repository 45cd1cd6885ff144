use chrono::NaiveDate;
use regcost_core::models::{ComplianceDeadline, CostRange, Industry, TrendPoint};
use serde::{Deserialize, Serialize};

/// Everything the composer needs for one customer and period.
///
/// Sourcing these values (deadline tracking, stored estimates, exposure
/// totals, prior scores) belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInputs {
    #[serde(default)]
    pub deadlines: Vec<ComplianceDeadline>,
    /// Reference date for deciding which deadlines are due.
    pub as_of: NaiveDate,
    /// The customer's calibrated one-time estimate ranges.
    #[serde(default)]
    pub estimates: Vec<CostRange>,
    #[serde(default)]
    pub total_exposure: f64,
    /// Earlier scores, oldest first.
    #[serde(default)]
    pub prior_trend: Vec<TrendPoint>,
    /// Label of the current point appended to the trend.
    #[serde(default)]
    pub period_label: String,
    #[serde(default)]
    pub industry: Option<Industry>,
}

impl HealthInputs {
    /// Inputs with no signals as of `as_of`.
    pub fn empty(as_of: NaiveDate) -> Self {
        Self {
            deadlines: Vec::new(),
            as_of,
            estimates: Vec::new(),
            total_exposure: 0.0,
            prior_trend: Vec::new(),
            period_label: as_of.format("%Y-%m").to_string(),
            industry: None,
        }
    }
}
