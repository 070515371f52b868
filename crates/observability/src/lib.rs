//! `shoplite-observability` — tracing/logging setup for the services.

mod tracing_init;

pub use tracing_init::{init, init_with_default_filter};
