use proptest::prelude::*;
use regcost_core::models::*;
use regcost_estimate::{calculate_implementation_cost, CostEstimateRequest, EstimationEngine};

fn arb_driver() -> impl Strategy<Value = CostDriver> {
    (
        0usize..CostCategory::ALL.len(),
        0usize..Department::ALL.len(),
        any::<bool>(),
        0.0f64..1_000_000.0,
        0.0f64..=1.0,
    )
        .prop_map(|(c, d, one_time, cost, confidence)| CostDriver {
            id: format!("d-{c}-{d}"),
            category: CostCategory::ALL[c],
            description: String::new(),
            is_one_time: one_time,
            estimated_cost: cost,
            confidence,
            department: Department::ALL[d],
        })
}

fn arb_profile() -> impl Strategy<Value = CompanyProfile> {
    (
        1u32..200_000,
        1u32..40,
        prop_oneof![Just(TechMaturity::Low), Just(TechMaturity::Medium), Just(TechMaturity::High)],
        prop_oneof![Just(RiskLevel::Low), Just(RiskLevel::Medium), Just(RiskLevel::High)],
    )
        .prop_map(|(employees, geo, tech, risk)| CompanyProfile {
            employee_count: employees,
            geographic_complexity: geo,
            tech_maturity: tech,
            risk_appetite: risk,
            ..CompanyProfile::default()
        })
}

fn arb_history() -> impl Strategy<Value = Vec<HistoricalVariance>> {
    prop::collection::vec((1.0f64..1_000_000.0, 0.0f64..3_000_000.0), 0..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter_map(|(e, a)| HistoricalVariance::from_outcome(e, a))
            .collect()
    })
}

proptest! {
    #[test]
    fn low_never_exceeds_high(
        drivers in prop::collection::vec(arb_driver(), 0..40),
        profile in arb_profile(),
    ) {
        let r = calculate_implementation_cost(&drivers, &profile).unwrap();
        prop_assert!(r.one_time_cost_low <= r.one_time_cost_high);
        prop_assert!(r.one_time_cost_low >= 0.0);
        prop_assert!((0.0..=1.0).contains(&r.confidence.value()));
    }

    #[test]
    fn every_driver_lands_in_exactly_one_bucket(
        drivers in prop::collection::vec(arb_driver(), 0..40),
    ) {
        let r = calculate_implementation_cost(&drivers, &CompanyProfile::default()).unwrap();
        let items: usize = r.department_breakdown.iter().map(|b| b.line_items.len()).sum();
        prop_assert_eq!(items, drivers.len());
        for bucket in &r.department_breakdown {
            prop_assert!(!bucket.line_items.is_empty());
            prop_assert!(bucket.line_items.iter().all(|d| d.department == bucket.department));
        }
    }

    #[test]
    fn scenario_costs_are_ordered(
        drivers in prop::collection::vec(arb_driver(), 0..20),
        history in arb_history(),
    ) {
        let est = EstimationEngine::new()
            .estimate(&CostEstimateRequest {
                drivers,
                historical_variances: history,
                ..Default::default()
            })
            .unwrap();
        let get = |n| est.scenarios.get(n).unwrap().three_year_total;
        prop_assert!(get(ScenarioName::Minimal) <= get(ScenarioName::Standard));
        prop_assert!(get(ScenarioName::Standard) <= get(ScenarioName::BestInClass));
        prop_assert!(get(ScenarioName::Standard) <= get(ScenarioName::Delay90Days));
        prop_assert!(est.result.one_time_cost_low <= est.result.one_time_cost_high);
    }

    #[test]
    fn estimation_is_deterministic(
        drivers in prop::collection::vec(arb_driver(), 0..20),
        history in arb_history(),
    ) {
        let request = CostEstimateRequest {
            drivers,
            historical_variances: history,
            ..Default::default()
        };
        let engine = EstimationEngine::new();
        prop_assert_eq!(engine.estimate(&request).unwrap(), engine.estimate(&request).unwrap());
    }

    #[test]
    fn more_employees_never_cheaper(
        drivers in prop::collection::vec(arb_driver(), 1..20),
        small in 1u32..10_000,
        extra in 0u32..100_000,
    ) {
        let p = |n| CompanyProfile { employee_count: n, ..CompanyProfile::default() };
        let a = calculate_implementation_cost(&drivers, &p(small)).unwrap();
        let b = calculate_implementation_cost(&drivers, &p(small + extra)).unwrap();
        prop_assert!(a.one_time_cost_high <= b.one_time_cost_high + 1e-6);
    }
}
