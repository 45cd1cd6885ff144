//! Span definitions per operation: estimate, scenario, calibration, health.

/// Create an estimation span.
#[macro_export]
macro_rules! estimate_span {
    ($driver_count:expr) => {
        tracing::info_span!("regcost.estimate", driver_count = $driver_count)
    };
}

/// Create a scenario generation span.
#[macro_export]
macro_rules! scenario_span {
    ($risk_appetite:expr) => {
        tracing::debug_span!("regcost.scenario", risk_appetite = %$risk_appetite)
    };
}

/// Create a calibration span.
#[macro_export]
macro_rules! calibration_span {
    ($history_len:expr) => {
        tracing::debug_span!("regcost.calibration", history_len = $history_len)
    };
}

/// Create a health scoring span.
#[macro_export]
macro_rules! health_span {
    ($period:expr) => {
        tracing::info_span!("regcost.health", period = %$period)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ESTIMATE: &str = "regcost.estimate";
    pub const SCENARIO: &str = "regcost.scenario";
    pub const CALIBRATION: &str = "regcost.calibration";
    pub const HEALTH: &str = "regcost.health";
}
