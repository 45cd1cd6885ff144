//! # regcost-health
//!
//! Compliance health score: three component signals (deadline adherence,
//! cost predictability, inverse risk exposure) combined with fixed weights
//! into a 0–100 score, plus a fixed-window trend.

pub mod components;
pub mod composer;
pub mod inputs;
pub mod trend;

pub use components::{cost_predictability, deadline_adherence, risk_exposure_inverse};
pub use composer::{compute_health_score, HealthScoreComposer};
pub use inputs::HealthInputs;
pub use trend::{build_trend, trend_direction};
