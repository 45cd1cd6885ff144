use regcost_core::errors::*;

#[test]
fn negative_cost_carries_driver_and_amount() {
    let err = ValidationError::NegativeCost {
        driver_id: "drv-7".into(),
        cost: -250.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("drv-7"));
    assert!(msg.contains("-250"));
}

#[test]
fn confidence_out_of_range_carries_value() {
    let err = ValidationError::ConfidenceOutOfRange {
        driver_id: "drv-1".into(),
        confidence: 1.5,
    };
    assert!(err.to_string().contains("1.5"));
}

#[test]
fn unknown_variant_names_field_and_value() {
    let err = ValidationError::UnknownVariant {
        field: "industry",
        value: "ALCHEMY".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("industry"));
    assert!(msg.contains("ALCHEMY"));
}

#[test]
fn validation_error_converts_to_regcost_error() {
    let err: RegcostError = ValidationError::InvalidEmployeeCount { value: 0 }.into();
    assert!(matches!(err, RegcostError::Validation(_)));
    assert!(err.is_client_error());
}

#[test]
fn serde_error_converts_to_regcost_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: RegcostError = serde_err.into();
    assert!(matches!(err, RegcostError::SerializationError(_)));
}

#[test]
fn config_error_is_not_a_client_error() {
    let err = RegcostError::ConfigError("bad".into());
    assert!(!err.is_client_error());
}
