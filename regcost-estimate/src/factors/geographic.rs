/// Geographic factor: `1 + step × (jurisdictions - 1)`. Range: ≥ 1.0.
pub fn calculate(jurisdictions: u32, step: f64) -> f64 {
    1.0 + step * jurisdictions.saturating_sub(1) as f64
}
