//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: repository/handler wiring behind `AppServices`
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Startup configuration, read from the environment by `main.rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppConfig {
    /// Seed the in-memory catalog with the demo products.
    pub seed_demo_data: bool,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: AppConfig) -> Router {
    let services = Arc::new(services::build_services(config));
    build_app_with_services(services)
}

/// Router over explicit services; lets tests inject their own repositories.
pub fn build_app_with_services(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}
