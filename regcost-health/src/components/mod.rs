//! Component signals, each in [0, 100].

mod deadline;
mod exposure;
mod predictability;

pub use deadline::deadline_adherence;
pub use exposure::risk_exposure_inverse;
pub use predictability::cost_predictability;
