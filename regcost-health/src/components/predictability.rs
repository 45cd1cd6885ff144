use regcost_core::models::CostRange;

/// `100 − mean(|high − low| / high) × 100` over the customer's estimates.
///
/// Ranges with a non-finite bound are skipped. A range with `high ≤ 0`
/// carries no relative width and counts as 0. With nothing left to average
/// the configured default is returned.
pub fn cost_predictability(estimates: &[CostRange], default: f64) -> f64 {
    let ratios: Vec<f64> = estimates
        .iter()
        .filter(|r| r.low.is_finite() && r.high.is_finite())
        .map(|r| {
            if r.high <= 0.0 {
                0.0
            } else {
                ((r.high - r.low).abs() / r.high).min(1.0)
            }
        })
        .collect();

    if ratios.is_empty() {
        return default;
    }
    let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
    (100.0 - mean * 100.0).clamp(0.0, 100.0)
}
