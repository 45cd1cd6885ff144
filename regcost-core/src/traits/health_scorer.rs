use crate::models::HealthComponents;

/// Weighted combination of health signals.
pub trait IHealthScorer: Send + Sync {
    /// Returns a score in [0, 100].
    fn score(&self, components: HealthComponents) -> u8;
}
