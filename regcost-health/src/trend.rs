//! Fixed-window score history and direction.

use regcost_core::models::{TrendDirection, TrendPoint};

/// Append `current` to `prior` and keep the most recent `window` points.
pub fn build_trend(prior: &[TrendPoint], current: TrendPoint, window: usize) -> Vec<TrendPoint> {
    let window = window.max(1);
    let keep_prior = window - 1;
    let start = prior.len().saturating_sub(keep_prior);
    let mut trend = Vec::with_capacity(window);
    trend.extend_from_slice(&prior[start..]);
    trend.push(current);
    trend
}

/// Compare the first and last points. Moves within `stable_band` are stable.
pub fn trend_direction(trend: &[TrendPoint], stable_band: u8) -> TrendDirection {
    let (Some(first), Some(last)) = (trend.first(), trend.last()) else {
        return TrendDirection::Stable;
    };
    let delta = i16::from(last.score) - i16::from(first.score);
    let band = i16::from(stable_band);
    if delta > band {
        TrendDirection::Improving
    } else if delta < -band {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}
