//! # regcost-observability
//!
//! Tracing subscriber setup and span macros shared by the engine crates.
//! The engine never installs a subscriber on its own; hosts call
//! [`init_tracing`] or [`init_tracing_with_config`] once at startup.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_config, spans};
