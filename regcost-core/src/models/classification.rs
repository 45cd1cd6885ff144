use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::errors::ValidationError;

/// What kind of work a cost driver pays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostCategory {
    LegalReview,
    SystemChanges,
    Training,
    Consulting,
    Audit,
    Personnel,
    Infrastructure,
    Other,
}

impl CostCategory {
    pub const ALL: [CostCategory; 8] = [
        Self::LegalReview,
        Self::SystemChanges,
        Self::Training,
        Self::Consulting,
        Self::Audit,
        Self::Personnel,
        Self::Infrastructure,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LegalReview => "LEGAL_REVIEW",
            Self::SystemChanges => "SYSTEM_CHANGES",
            Self::Training => "TRAINING",
            Self::Consulting => "CONSULTING",
            Self::Audit => "AUDIT",
            Self::Personnel => "PERSONNEL",
            Self::Infrastructure => "INFRASTRUCTURE",
            Self::Other => "OTHER",
        }
    }

    /// Categories whose cost depends on how mature the organization's tech stack is.
    pub fn is_technology_bound(self) -> bool {
        matches!(self, Self::SystemChanges | Self::Infrastructure)
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "category",
                value: s.to_string(),
            })
    }
}

/// Organizational unit a cost is attributed to.
///
/// Unlike the other enums this one is lenient: unknown, missing, or null
/// values deserialize to [`Department::Other`] so no driver is ever dropped.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    Legal,
    Compliance,
    It,
    Hr,
    Finance,
    Operations,
    Security,
    #[default]
    Other,
}

impl Department {
    pub const ALL: [Department; 8] = [
        Self::Legal,
        Self::Compliance,
        Self::It,
        Self::Hr,
        Self::Finance,
        Self::Operations,
        Self::Security,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legal => "LEGAL",
            Self::Compliance => "COMPLIANCE",
            Self::It => "IT",
            Self::Hr => "HR",
            Self::Finance => "FINANCE",
            Self::Operations => "OPERATIONS",
            Self::Security => "SECURITY",
            Self::Other => "OTHER",
        }
    }

    /// Parse a department label, falling back to `Other` for anything unrecognized.
    /// Matching ignores case and treats spaces and hyphens as underscores.
    pub fn from_label_lenient(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == normalized)
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Department {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(Department::from_label_lenient)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_wire_name() {
        for c in CostCategory::ALL {
            assert_eq!(c.as_str().parse::<CostCategory>().unwrap(), c);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "MARKETING".parse::<CostCategory>().unwrap_err();
        assert!(err.to_string().contains("MARKETING"));
    }

    #[test]
    fn department_label_is_lenient() {
        assert_eq!(Department::from_label_lenient("hr"), Department::Hr);
        assert_eq!(Department::from_label_lenient(" it "), Department::It);
        assert_eq!(Department::from_label_lenient("Marketing"), Department::Other);
        assert_eq!(Department::from_label_lenient(""), Department::Other);
    }

    #[test]
    fn department_null_deserializes_to_other() {
        let d: Department = serde_json::from_str("null").unwrap();
        assert_eq!(d, Department::Other);
        let d: Department = serde_json::from_str("\"R_AND_D\"").unwrap();
        assert_eq!(d, Department::Other);
        let d: Department = serde_json::from_str("\"FINANCE\"").unwrap();
        assert_eq!(d, Department::Finance);
    }
}
