use chrono::NaiveDate;
use proptest::prelude::*;
use regcost_core::models::*;
use regcost_health::{compute_health_score, HealthInputs, HealthScoreComposer};

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..2_000).prop_map(|d| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(d)
    })
}

fn arb_deadline() -> impl Strategy<Value = ComplianceDeadline> {
    (arb_date(), prop::option::of(arb_date())).prop_map(|(due, done)| ComplianceDeadline {
        id: format!("dl-{due}"),
        due_date: due,
        completed_on: done,
    })
}

fn arb_range() -> impl Strategy<Value = CostRange> {
    (-1_000.0f64..1_000_000.0, -1_000.0f64..1_000_000.0)
        .prop_map(|(low, high)| CostRange { low, high })
}

proptest! {
    #[test]
    fn score_bounded_for_any_components(
        d in prop::num::f64::ANY,
        c in prop::num::f64::ANY,
        r in prop::num::f64::ANY,
    ) {
        let score = compute_health_score(HealthComponents {
            deadline_adherence: d,
            cost_predictability: c,
            risk_exposure_inverse: r,
        });
        prop_assert!(score <= 100);
    }

    #[test]
    fn composed_outputs_stay_in_range(
        deadlines in prop::collection::vec(arb_deadline(), 0..20),
        estimates in prop::collection::vec(arb_range(), 0..20),
        exposure in prop::num::f64::ANY,
        as_of in arb_date(),
    ) {
        let inputs = HealthInputs {
            deadlines,
            estimates,
            total_exposure: exposure,
            ..HealthInputs::empty(as_of)
        };
        let out = HealthScoreComposer::new().compose(&inputs);
        prop_assert!(out.score <= 100);
        for v in [
            out.components.deadline_adherence,
            out.components.cost_predictability,
            out.components.risk_exposure_inverse,
        ] {
            prop_assert!((0.0..=100.0).contains(&v));
        }
        prop_assert!(!out.trend.is_empty());
    }

    #[test]
    fn more_exposure_never_raises_score(a in 0.0f64..5_000_000.0, extra in 0.0f64..5_000_000.0) {
        let composer = HealthScoreComposer::new();
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let low = composer.compose(&HealthInputs {
            total_exposure: a,
            ..HealthInputs::empty(as_of)
        });
        let high = composer.compose(&HealthInputs {
            total_exposure: a + extra,
            ..HealthInputs::empty(as_of)
        });
        prop_assert!(high.score <= low.score);
    }
}
