//! Company profile resolution: fill documented defaults, reject malformed values.

use regcost_core::errors::{RegcostResult, ValidationError};
use regcost_core::models::{CompanyProfile, PartialProfile};

/// Resolve caller-supplied attributes into a full profile.
///
/// Missing fields take [`CompanyProfile::default`] values. Fails when
/// `employee_count <= 0`, `geographic_complexity < 1`, or revenue is
/// negative or non-finite.
pub fn resolve_profile(partial: &PartialProfile) -> RegcostResult<CompanyProfile> {
    let defaults = CompanyProfile::default();

    let employee_count = match partial.employee_count {
        None => defaults.employee_count,
        Some(n) => u32::try_from(n)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ValidationError::InvalidEmployeeCount { value: n })?,
    };

    let geographic_complexity = match partial.geographic_complexity {
        None => defaults.geographic_complexity,
        Some(n) => u32::try_from(n)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or(ValidationError::InvalidGeographicComplexity { value: n })?,
    };

    if let Some(revenue) = partial.revenue {
        if !revenue.is_finite() || revenue < 0.0 {
            return Err(ValidationError::InvalidRevenue { value: revenue }.into());
        }
    }

    Ok(CompanyProfile {
        industry: partial.industry.unwrap_or(defaults.industry),
        employee_count,
        revenue: partial.revenue,
        geographic_complexity,
        tech_maturity: partial.tech_maturity.unwrap_or(defaults.tech_maturity),
        risk_appetite: partial.risk_appetite.unwrap_or(defaults.risk_appetite),
    })
}
