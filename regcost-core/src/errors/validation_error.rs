/// Malformed profile or driver input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("employee count must be positive, got {value}")]
    InvalidEmployeeCount { value: i64 },

    #[error("geographic complexity must be at least 1, got {value}")]
    InvalidGeographicComplexity { value: i64 },

    #[error("revenue must be a non-negative finite amount, got {value}")]
    InvalidRevenue { value: f64 },

    #[error("driver {driver_id}: estimated cost must be non-negative, got {cost}")]
    NegativeCost { driver_id: String, cost: f64 },

    #[error("driver {driver_id}: estimated cost is not a finite number")]
    NonFiniteCost { driver_id: String },

    #[error("driver {driver_id}: confidence must be within [0, 1], got {confidence}")]
    ConfidenceOutOfRange { driver_id: String, confidence: f64 },

    #[error("adjusted {total} total is not finite; driver costs are too large")]
    CostOverflow { total: &'static str },

    #[error("unknown {field} value: {value}")]
    UnknownVariant { field: &'static str, value: String },
}
