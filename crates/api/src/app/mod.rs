//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: pricing engine + ledger shared by all handlers
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and mapping into domain types
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: services::AppServices) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::log_requests))
            .layer(Extension(Arc::new(services))),
    )
}
