//! Confidence adjustment bounded by sample size.
//!
//! Tight clustering across at least two samples raises confidence, scaled by
//! the share of the mean bias the range shift actually corrects. Dispersion
//! above the spread threshold, or bias beyond `max_mean_shift`, lowers it
//! toward (never below) the uncalibrated floor. Movement is capped at
//! `min(max_confidence_delta, per_sample_confidence_delta × n)`.

use regcost_core::config::CalibrationConfig;
use regcost_core::models::Confidence;

use crate::statistics::VarianceStats;

/// Samples needed before spread says anything about clustering.
const MIN_SAMPLES_FOR_RAISE: usize = 2;

/// Largest confidence movement `n` samples may justify.
pub fn movement_cap(sample_size: usize, config: &CalibrationConfig) -> f64 {
    (config.per_sample_confidence_delta * sample_size as f64).min(config.max_confidence_delta)
}

/// Share of the mean bias that the clamped range shift corrects, in [0, 1].
pub fn bias_coverage(mean: f64, config: &CalibrationConfig) -> f64 {
    let bias = mean.abs();
    if bias <= config.max_mean_shift {
        1.0
    } else {
        config.max_mean_shift / bias
    }
}

/// Adjust `base` given the history statistics. Returns the new confidence.
pub fn adjust(base: Confidence, stats: &VarianceStats, config: &CalibrationConfig) -> Confidence {
    let cap = movement_cap(stats.sample_size, config);
    let spread = stats.spread();
    let threshold = config.spread_threshold;
    let coverage = bias_coverage(stats.mean, config);

    let raise = if stats.sample_size >= MIN_SAMPLES_FOR_RAISE && spread <= threshold {
        let tightness = if threshold > 0.0 {
            1.0 - spread / threshold
        } else {
            1.0
        };
        cap * tightness * coverage
    } else {
        0.0
    };

    let dispersion = if spread <= threshold {
        0.0
    } else if threshold > 0.0 {
        ((spread - threshold) / threshold).min(1.0)
    } else {
        1.0
    };
    let lower = cap * dispersion.max(1.0 - coverage);

    let net = raise - lower;
    if net >= 0.0 {
        return base + net;
    }
    let current = base.value();
    if current <= config.confidence_floor {
        return base;
    }
    Confidence::new((current + net).max(config.confidence_floor))
}
