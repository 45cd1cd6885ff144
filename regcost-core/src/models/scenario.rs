use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::RiskLevel;

/// The four named implementation scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioName {
    Minimal,
    Standard,
    BestInClass,
    #[serde(rename = "delay90Days")]
    Delay90Days,
}

impl ScenarioName {
    /// Generation order; also the tie-break order for recommendations.
    pub const ALL: [ScenarioName; 4] = [
        Self::Minimal,
        Self::Standard,
        Self::BestInClass,
        Self::Delay90Days,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::BestInClass => "bestInClass",
            Self::Delay90Days => "delay90Days",
        }
    }
}

impl fmt::Display for ScenarioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hypothetical cost trajectory derived from the base estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostScenario {
    pub name: ScenarioName,
    pub description: String,
    pub one_time_cost: f64,
    pub recurring_cost_annual: f64,
    /// `one_time_cost + recurring_cost_annual * 3`.
    pub three_year_total: f64,
    pub risk_level: RiskLevel,
    pub assumptions: Vec<String>,
}

/// All four scenarios plus the recommended one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAnalysis {
    /// Always in [`ScenarioName::ALL`] order.
    pub scenarios: Vec<CostScenario>,
    pub recommended: ScenarioName,
}

impl ScenarioAnalysis {
    pub fn get(&self, name: ScenarioName) -> Option<&CostScenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }
}
