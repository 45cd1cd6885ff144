//! # regcost-estimate
//!
//! Cost estimation pipeline: profile resolution → department aggregation →
//! multiplier-adjusted cost range → learning feedback → scenarios.
//! Every function is pure; identical inputs give identical outputs.

pub mod aggregation;
pub mod calculator;
pub mod engine;
pub mod factors;
pub mod fingerprint;
pub mod profile;
pub mod request;
pub mod scenarios;

pub use aggregation::aggregate_by_department;
pub use calculator::{calculate_implementation_cost, CostCalculator};
pub use engine::EstimationEngine;
pub use profile::resolve_profile;
pub use request::{CostEstimate, CostEstimateRequest};
pub use scenarios::{generate_scenarios, ScenarioGenerator};
