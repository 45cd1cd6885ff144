use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ValidationError;

/// Industry vertical of the organization.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Industry {
    #[default]
    Technology,
    FinancialServices,
    Healthcare,
    Manufacturing,
    Retail,
    Energy,
    Government,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Self::Technology,
        Self::FinancialServices,
        Self::Healthcare,
        Self::Manufacturing,
        Self::Retail,
        Self::Energy,
        Self::Government,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technology => "TECHNOLOGY",
            Self::FinancialServices => "FINANCIAL_SERVICES",
            Self::Healthcare => "HEALTHCARE",
            Self::Manufacturing => "MANUFACTURING",
            Self::Retail => "RETAIL",
            Self::Energy => "ENERGY",
            Self::Government => "GOVERNMENT",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "industry",
                value: s.to_string(),
            })
    }
}

/// How mature the organization's technology stack is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TechMaturity {
    Low,
    #[default]
    Medium,
    High,
}

impl TechMaturity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl FromStr for TechMaturity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            other => Err(ValidationError::UnknownVariant {
                field: "techMaturity",
                value: other.to_string(),
            }),
        }
    }
}

/// Ordered risk scale. Also used for a company's risk appetite.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// One notch riskier, saturating at `High`.
    pub fn raised(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    /// One notch safer, saturating at `Low`.
    pub fn lowered(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium | Self::Low => Self::Low,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            other => Err(ValidationError::UnknownVariant {
                field: "riskLevel",
                value: other.to_string(),
            }),
        }
    }
}

/// Fully resolved company attributes. Produced by the profile resolver;
/// immutable for the duration of a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub industry: Industry,
    pub employee_count: u32,
    pub revenue: Option<f64>,
    /// Number of jurisdictions the company operates in.
    pub geographic_complexity: u32,
    pub tech_maturity: TechMaturity,
    pub risk_appetite: RiskLevel,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            industry: Industry::Technology,
            employee_count: 100,
            revenue: None,
            geographic_complexity: 1,
            tech_maturity: TechMaturity::Medium,
            risk_appetite: RiskLevel::Low,
        }
    }
}

/// Caller-supplied company attributes, any of which may be missing.
///
/// Integer fields are signed so non-positive values can be reported
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialProfile {
    pub industry: Option<Industry>,
    pub employee_count: Option<i64>,
    pub revenue: Option<f64>,
    pub geographic_complexity: Option<i64>,
    pub tech_maturity: Option<TechMaturity>,
    pub risk_appetite: Option<RiskLevel>,
}

impl From<CompanyProfile> for PartialProfile {
    fn from(p: CompanyProfile) -> Self {
        Self {
            industry: Some(p.industry),
            employee_count: Some(i64::from(p.employee_count)),
            revenue: p.revenue,
            geographic_complexity: Some(i64::from(p.geographic_complexity)),
            tech_maturity: Some(p.tech_maturity),
            risk_appetite: Some(p.risk_appetite),
        }
    }
}
