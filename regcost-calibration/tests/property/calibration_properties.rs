use proptest::prelude::*;
use regcost_calibration::apply_learning_feedback;
use regcost_core::models::*;

fn arb_base() -> impl Strategy<Value = CostEstimateResult> {
    (0.0f64..1_000_000.0, 0.0f64..500_000.0, 0.0f64..=1.0).prop_map(|(low, width, conf)| {
        CostEstimateResult {
            one_time_cost_low: low,
            one_time_cost_high: low + width,
            recurring_cost_annual: 0.0,
            department_breakdown: vec![],
            estimation_method: EstimationMethod::Deterministic,
            confidence: Confidence::new(conf),
        }
    })
}

fn arb_history() -> impl Strategy<Value = Vec<HistoricalVariance>> {
    prop::collection::vec((1.0f64..1_000_000.0, 0.0f64..5_000_000.0), 0..30).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter_map(|(e, a)| HistoricalVariance::from_outcome(e, a))
            .collect()
    })
}

proptest! {
    #[test]
    fn low_never_exceeds_high(base in arb_base(), history in arb_history()) {
        let out = apply_learning_feedback(&base, &history);
        prop_assert!(out.one_time_cost_low <= out.one_time_cost_high);
        prop_assert!(out.one_time_cost_low >= 0.0);
    }

    #[test]
    fn confidence_stays_in_unit_interval(base in arb_base(), history in arb_history()) {
        let out = apply_learning_feedback(&base, &history);
        prop_assert!((0.0..=1.0).contains(&out.confidence.value()));
    }

    #[test]
    fn confidence_movement_bounded_by_sample_size(
        base in arb_base(),
        history in arb_history(),
    ) {
        let out = apply_learning_feedback(&base, &history);
        let cap = (0.05 * history.len() as f64).min(0.15);
        let delta = (out.confidence.value() - base.confidence.value()).abs();
        prop_assert!(delta <= cap + 1e-9, "delta {} > cap {}", delta, cap);
    }

    #[test]
    fn calibration_is_deterministic(base in arb_base(), history in arb_history()) {
        let a = apply_learning_feedback(&base, &history);
        let b = apply_learning_feedback(&base, &history);
        prop_assert_eq!(a, b);
    }
}
