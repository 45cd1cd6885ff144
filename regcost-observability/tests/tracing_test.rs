use regcost_core::config::ObservabilityConfig;
use regcost_observability::{init_tracing, init_tracing_with_config};

#[test]
fn tracing_init_is_idempotent() {
    let config = ObservabilityConfig {
        log_level: "debug".into(),
        json_logs: true,
    };
    init_tracing_with_config(&config);
    // Second and third calls must not panic on an already-installed subscriber.
    init_tracing();
    init_tracing_with_config(&config);
    tracing::info!(check = "idempotent", "tracing initialized");
}
