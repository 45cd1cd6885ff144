//! Department rollup: one-time vs recurring cost per organizational unit.

use std::collections::BTreeMap;

use regcost_core::config::defaults::DEFAULT_COST_PER_FTE;
use regcost_core::config::EstimationConfig;
use regcost_core::models::{CostDriver, Department, DepartmentCostBreakdown};

/// Bucket drivers by department using the default cost-per-FTE.
///
/// Only departments present in `drivers` appear in the map. Drivers whose
/// department was unknown or missing already carry `Department::Other`.
pub fn aggregate_by_department(
    drivers: &[CostDriver],
) -> BTreeMap<Department, DepartmentCostBreakdown> {
    aggregate_with_config(drivers, &EstimationConfig::default())
}

/// Bucket drivers by department with an explicit configuration
/// (cost-per-FTE override and budget codes).
pub fn aggregate_with_config(
    drivers: &[CostDriver],
    config: &EstimationConfig,
) -> BTreeMap<Department, DepartmentCostBreakdown> {
    let mut buckets: BTreeMap<Department, DepartmentCostBreakdown> = BTreeMap::new();

    for driver in drivers {
        let bucket = buckets.entry(driver.department).or_insert_with(|| {
            let mut b = DepartmentCostBreakdown::empty(driver.department);
            b.budget_code = config.budget_code(driver.department);
            b
        });
        if driver.is_one_time {
            bucket.one_time_cost += driver.estimated_cost;
        } else {
            bucket.recurring_cost_annual += driver.estimated_cost;
        }
        bucket.line_items.push(driver.clone());
    }

    for bucket in buckets.values_mut() {
        bucket.fte_impact = fte_impact(bucket.recurring_cost_annual, config.cost_per_fte);
    }

    buckets
}

/// Full-time equivalents implied by an annual recurring cost.
pub fn fte_impact(recurring_cost_annual: f64, cost_per_fte: f64) -> f64 {
    let per_fte = if cost_per_fte > 0.0 {
        cost_per_fte
    } else {
        DEFAULT_COST_PER_FTE
    };
    (recurring_cost_annual / per_fte).max(0.0)
}
