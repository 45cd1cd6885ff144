//! # regcost-calibration
//!
//! Learning feedback: variance statistics → range shift or widening →
//! sample-bounded confidence adjustment.
//! Sparse history is shrunk toward "no correction" so a single data point
//! can never produce a large swing.

pub mod confidence;
pub mod engine;
pub mod range;
pub mod statistics;

pub use engine::{apply_learning_feedback, CalibrationBreakdown, CalibrationEngine};
pub use statistics::VarianceStats;
