//! Company multipliers applied to driver costs.

pub mod geographic;
pub mod maturity;
pub mod size;

use regcost_core::config::EstimationConfig;
use regcost_core::models::{CompanyProfile, CostCategory, CostDriver};

/// The multipliers resolved for one company profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    /// Sub-linear company-size factor, one-time costs only.
    pub size: f64,
    /// `1 + step × (jurisdictions - 1)`.
    pub geographic: f64,
    /// Applied to tech-bound categories only.
    pub tech_maturity: f64,
}

impl Multipliers {
    pub fn for_profile(profile: &CompanyProfile, config: &EstimationConfig) -> Self {
        Self {
            size: size::calculate(profile.employee_count),
            geographic: geographic::calculate(
                profile.geographic_complexity,
                config.geographic_step,
            ),
            tech_maturity: maturity::calculate(profile.tech_maturity, config),
        }
    }

    fn category_factor(&self, category: CostCategory) -> f64 {
        if category.is_technology_bound() {
            self.tech_maturity
        } else {
            1.0
        }
    }

    /// Adjusted cost of a one-time driver.
    pub fn one_time(&self, driver: &CostDriver) -> f64 {
        driver.estimated_cost * self.size * self.geographic * self.category_factor(driver.category)
    }

    /// Adjusted annual cost of a recurring driver.
    pub fn recurring(&self, driver: &CostDriver) -> f64 {
        driver.estimated_cost * self.geographic * self.category_factor(driver.category)
    }
}
