//! Summary statistics over a customer's historical variances.

use regcost_core::models::HistoricalVariance;

/// Mean and spread of the usable variances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarianceStats {
    pub sample_size: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl VarianceStats {
    /// Summarize usable (finite) variances. Returns `None` when none remain.
    pub fn from_history(history: &[HistoricalVariance]) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for v in history.iter().filter(|v| v.is_usable()) {
            count += 1;
            sum += v.variance;
            min = min.min(v.variance);
            max = max.max(v.variance);
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            sample_size: count,
            mean: sum / count as f64,
            min,
            max,
        })
    }

    /// `max - min`.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }

    /// Shrinkage weight `n / (n + k)`: near zero for sparse history, toward 1 as n grows.
    pub fn weight(&self, shrinkage_samples: f64) -> f64 {
        let n = self.sample_size as f64;
        n / (n + shrinkage_samples.max(0.0))
    }
}
