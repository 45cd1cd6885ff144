use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One past estimate compared against its confirmed actual cost.
///
/// `variance = (actual - estimated) / estimated`. Calibration input only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalVariance {
    pub estimated: f64,
    pub actual: f64,
    pub variance: f64,
}

impl HistoricalVariance {
    /// Build from an outcome. Returns `None` when the estimate is not a
    /// positive finite amount, since the relative variance is undefined.
    pub fn from_outcome(estimated: f64, actual: f64) -> Option<Self> {
        if !estimated.is_finite() || !actual.is_finite() || estimated <= 0.0 {
            return None;
        }
        Some(Self {
            estimated,
            actual,
            variance: (actual - estimated) / estimated,
        })
    }

    /// Whether the stored variance is usable for calibration.
    pub fn is_usable(&self) -> bool {
        self.variance.is_finite()
    }
}
