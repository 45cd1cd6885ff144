mod classification;
mod confidence;
mod cost_driver;
mod estimate;
mod health;
mod history;
mod profile;
mod scenario;

pub use classification::{CostCategory, Department};
pub use confidence::Confidence;
pub use cost_driver::{CostDriver, DriverOrigin};
pub use estimate::{
    CalibratedRange, CostEstimateResult, CostRange, DepartmentCostBreakdown, EstimationMethod,
};
pub use health::{
    ComplianceDeadline, ComplianceHealthScore, HealthComponents, TrendDirection, TrendPoint,
};
pub use history::HistoricalVariance;
pub use profile::{CompanyProfile, Industry, PartialProfile, RiskLevel, TechMaturity};
pub use scenario::{CostScenario, ScenarioAnalysis, ScenarioName};
