//! Tracing setup: structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use regcost_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-crate log directives,
/// e.g. `REGCOST_LOG=regcost_calibration=debug,regcost_estimate=info`.
pub const LOG_ENV_VAR: &str = "REGCOST_LOG";

/// Initialize the tracing subscriber from `REGCOST_LOG`.
///
/// Falls back to `regcost=info` if the variable is unset or invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("regcost=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

/// Initialize tracing from config. `REGCOST_LOG` still wins when set.
///
/// Idempotent, and a no-op if [`init_tracing`] already ran.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

        if config.json_logs {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .json()
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    });
}
