//! # regcost-core
//!
//! Foundation crate for the regcost compliance cost engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RegcostConfig;
pub use errors::{RegcostError, RegcostResult, ValidationError};
pub use models::{
    CompanyProfile, Confidence, CostCategory, CostDriver, CostEstimateResult, Department,
    DepartmentCostBreakdown, EstimationMethod, HistoricalVariance, Industry, RiskLevel,
    TechMaturity,
};
