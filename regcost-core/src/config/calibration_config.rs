use serde::{Deserialize, Serialize};

use super::defaults;

/// Learning-feedback calibration configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Variance spread (max - min) above which the range is widened.
    pub spread_threshold: f64,
    /// Pseudo-count for shrinking corrections toward zero: w = n / (n + k).
    pub shrinkage_samples: f64,
    /// Largest relative shift the mean variance may apply.
    pub max_mean_shift: f64,
    /// Confidence movement allowed per historical sample.
    pub per_sample_confidence_delta: f64,
    /// Absolute cap on confidence movement.
    pub max_confidence_delta: f64,
    /// Confidence never drops below this through calibration.
    pub confidence_floor: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            spread_threshold: defaults::DEFAULT_SPREAD_THRESHOLD,
            shrinkage_samples: defaults::DEFAULT_SHRINKAGE_SAMPLES,
            max_mean_shift: defaults::DEFAULT_MAX_MEAN_SHIFT,
            per_sample_confidence_delta: defaults::DEFAULT_PER_SAMPLE_CONFIDENCE_DELTA,
            max_confidence_delta: defaults::DEFAULT_MAX_CONFIDENCE_DELTA,
            confidence_floor: defaults::DEFAULT_CONFIDENCE_FLOOR,
        }
    }
}
