use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A regulatory deadline and when (if ever) it was satisfied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDeadline {
    pub id: String,
    pub due_date: NaiveDate,
    pub completed_on: Option<NaiveDate>,
}

impl ComplianceDeadline {
    /// Completed on or before the due date.
    pub fn is_met(&self) -> bool {
        self.completed_on.is_some_and(|done| done <= self.due_date)
    }

    /// Counts toward adherence as of `as_of`: completed, or already due.
    pub fn is_assessable(&self, as_of: NaiveDate) -> bool {
        self.completed_on.is_some() || self.due_date <= as_of
    }
}

/// The three health signals, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HealthComponents {
    pub deadline_adherence: f64,
    pub cost_predictability: f64,
    pub risk_exposure_inverse: f64,
}

impl HealthComponents {
    /// Clamp every component into [0, 100]; NaN becomes 0.
    pub fn clamped(self) -> Self {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) };
        Self {
            deadline_adherence: clamp(self.deadline_adherence),
            cost_predictability: clamp(self.cost_predictability),
            risk_exposure_inverse: clamp(self.risk_exposure_inverse),
        }
    }
}

/// One labelled point of the score history (e.g. a month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendPoint {
    pub label: String,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Improving,
    Declining,
    #[default]
    Stable,
}

/// Composite compliance health score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceHealthScore {
    pub score: u8,
    pub components: HealthComponents,
    pub trend: Vec<TrendPoint>,
    pub trend_direction: TrendDirection,
    pub industry_benchmark: Option<u8>,
}
