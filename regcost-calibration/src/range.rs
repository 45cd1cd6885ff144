//! One-time range adjustment: shift by the shrunk mean variance, and widen
//! when historical outcomes disagree with each other.

use regcost_core::config::CalibrationConfig;
use tracing::warn;

use crate::statistics::VarianceStats;

/// Upper bound on how much of the midpoint widening may add in total.
const MAX_WIDEN_RATIO: f64 = 1.0;

/// Adjusted bounds plus the amounts applied, for the breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeAdjustment {
    pub low: f64,
    pub high: f64,
    /// Amount added to both bounds.
    pub shift: f64,
    /// Amount subtracted from low and added to high.
    pub widen: f64,
    pub widened: bool,
}

/// Shift both bounds by `clamp(mean) × w × midpoint`; when the spread exceeds
/// the threshold, also push each bound outward by `midpoint × min(spread × w, 1) / 2`.
///
/// Low is floored at zero and high never drops below low.
pub fn adjust(
    low: f64,
    high: f64,
    stats: &VarianceStats,
    config: &CalibrationConfig,
) -> RangeAdjustment {
    let weight = stats.weight(config.shrinkage_samples);
    let midpoint = (low + high) / 2.0;

    let mean = stats
        .mean
        .clamp(-config.max_mean_shift, config.max_mean_shift);
    let shift = mean * weight * midpoint;

    let widened = stats.spread() > config.spread_threshold;
    let widen = if widened {
        midpoint * (stats.spread() * weight).min(MAX_WIDEN_RATIO) / 2.0
    } else {
        0.0
    };

    let mut new_low = (low + shift - widen).max(0.0);
    let mut new_high = high + shift + widen;

    if !new_low.is_finite() || !new_high.is_finite() {
        warn!(low, high, shift, widen, "non-finite calibrated bounds, keeping base range");
        new_low = low;
        new_high = high;
    }
    if new_high < new_low {
        warn!(new_low, new_high, "calibrated high below low, clamping");
        new_high = new_low;
    }

    RangeAdjustment {
        low: new_low,
        high: new_high,
        shift,
        widen,
        widened,
    }
}
