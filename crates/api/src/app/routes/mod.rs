use axum::{
    routing::{get, post},
    Router,
};

pub mod shipments;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route(
            "/shipments",
            post(shipments::create_shipment).get(shipments::list_shipments),
        )
}
