/// `max(0, 100 − min(100, exposure / per_point))`.
///
/// Negative or NaN exposure is treated as none.
pub fn risk_exposure_inverse(total_exposure: f64, per_point: f64) -> f64 {
    if total_exposure.is_nan() || total_exposure <= 0.0 {
        return 100.0;
    }
    (100.0 - (total_exposure / per_point).min(100.0)).max(0.0)
}
