/// Employee count the size multiplier is normalized against (multiplier = 1.0).
pub const SIZE_REFERENCE_EMPLOYEES: f64 = 100.0;

/// Health score component weights. Must sum to 1.0.
pub const WEIGHT_DEADLINE_ADHERENCE: f64 = 0.4;
pub const WEIGHT_COST_PREDICTABILITY: f64 = 0.4;
pub const WEIGHT_RISK_EXPOSURE_INVERSE: f64 = 0.2;

/// Health score bounds.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Scenario multipliers as (one-time, recurring).
pub const MINIMAL_MULTIPLIERS: (f64, f64) = (0.7, 0.8);
pub const STANDARD_MULTIPLIERS: (f64, f64) = (1.0, 1.0);
pub const BEST_IN_CLASS_MULTIPLIERS: (f64, f64) = (1.4, 1.2);
pub const DELAY_MULTIPLIERS: (f64, f64) = (1.0, 1.0);

/// Horizon (years) used for scenario totals.
pub const SCENARIO_HORIZON_YEARS: f64 = 3.0;
