use regcost_core::config::RegcostConfig;
use regcost_core::models::{
    ComplianceHealthScore, Confidence, CostEstimateResult, EstimationMethod, TrendDirection,
    TrendPoint,
};
use regcost_health::{HealthInputs, HealthScoreComposer};
use serde::Deserialize;
use test_fixtures::{list_fixtures, load_fixture};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Expected {
    deadline_adherence: f64,
    cost_predictability: f64,
    risk_exposure_inverse: f64,
    score: u8,
}

#[derive(Debug, Deserialize)]
struct GoldenHealth {
    description: String,
    inputs: HealthInputs,
    expected: Expected,
}

#[test]
fn golden_health_scores_match() {
    let composer = HealthScoreComposer::new();
    let files = list_fixtures("golden/health");
    assert!(!files.is_empty());
    for file in files {
        let rel = format!("golden/health/{}", file.file_name().unwrap().to_string_lossy());
        let golden: GoldenHealth = load_fixture(&rel);
        let out = composer.compose(&golden.inputs);
        let e = &golden.expected;
        let c = &out.components;
        let name = &golden.description;
        assert!((c.deadline_adherence - e.deadline_adherence).abs() < 1e-9, "{name}");
        assert!((c.cost_predictability - e.cost_predictability).abs() < 1e-9, "{name}");
        assert!((c.risk_exposure_inverse - e.risk_exposure_inverse).abs() < 1e-9, "{name}");
        assert_eq!(out.score, e.score, "{}", golden.description);
        assert_eq!(out.trend.last().map(|p| p.score), Some(e.score));
    }
}

#[test]
fn configured_window_and_predictability_default() {
    let config = RegcostConfig::from_toml(
        r#"
        [health]
        trend_window = 3
        default_cost_predictability = 100.0
        "#,
    )
    .unwrap();
    let composer = HealthScoreComposer::with_config(config.health);
    let mut inputs: HealthInputs =
        serde_json::from_str(r#"{"asOf":"2026-06-30","periodLabel":"Jun"}"#).unwrap();
    inputs.prior_trend = ["Jan", "Feb", "Mar", "Apr", "May"]
        .iter()
        .map(|l| TrendPoint {
            label: (*l).to_string(),
            score: 99,
        })
        .collect();

    let out = composer.compose(&inputs);
    assert_eq!(out.score, 100);
    let labels: Vec<&str> = out.trend.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Apr", "May", "Jun"]);
    assert_eq!(out.trend_direction, TrendDirection::Stable);
}

#[test]
fn composition_is_deterministic() {
    let inputs: HealthInputs = load_golden_inputs("golden/health/saturated_exposure.json");
    let composer = HealthScoreComposer::new();
    assert_eq!(composer.compose(&inputs), composer.compose(&inputs));
}

#[test]
fn score_serializes_camel_case() {
    let inputs: HealthInputs = load_golden_inputs("golden/health/documented_example.json");
    let out: ComplianceHealthScore = HealthScoreComposer::new().compose(&inputs);
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["score"], 92);
    assert_eq!(json["components"]["costPredictability"], 80.0);
    assert_eq!(json["trendDirection"], "STABLE");
    assert!(json["industryBenchmark"].is_null());
}

#[test]
fn estimate_ranges_feed_cost_predictability() {
    let estimate = |low: f64, high: f64| CostEstimateResult {
        one_time_cost_low: low,
        one_time_cost_high: high,
        recurring_cost_annual: 0.0,
        department_breakdown: vec![],
        estimation_method: EstimationMethod::HistoricalAdjusted,
        confidence: Confidence::new(0.7),
    };
    let mut inputs: HealthInputs = serde_json::from_str(r#"{"asOf":"2026-06-30"}"#).unwrap();
    inputs.estimates = [estimate(95_000.0, 100_000.0), estimate(85_000.0, 100_000.0)]
        .iter()
        .map(CostEstimateResult::range)
        .collect();
    let out = HealthScoreComposer::new().compose(&inputs);
    assert!((out.components.cost_predictability - 90.0).abs() < 1e-9);
}

fn load_golden_inputs(path: &str) -> HealthInputs {
    let value = test_fixtures::load_fixture_value(path);
    serde_json::from_value(value["inputs"].clone()).unwrap()
}
