use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use shiprate_core::CustomerId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

/// Price and record a shipment. The body is parsed as JSON whatever the
/// `Content-Type` header says.
pub async fn create_shipment(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let body: dto::CreateShipmentRequest = match serde_json::from_slice(&body) {
        Ok(b) => b,
        Err(e) => return errors::invalid_body(e),
    };

    let request = match body.into_domain() {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.create_shipment(request) {
        Ok(shipment) => {
            tracing::info!(
                customer_id = %shipment.customer_id(),
                sender = %shipment.sender(),
                receiver = %shipment.receiver(),
                price = shipment.price(),
                "shipment created"
            );
            (StatusCode::OK, Json(shipment)).into_response()
        }
        Err(e) => {
            tracing::warn!(code = e.code(), "shipment rejected: {e}");
            errors::pricing_error_to_response(e)
        }
    }
}

/// Shipments of `?customerId=`, oldest first. No or unknown customer yields `[]`.
pub async fn list_shipments(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListShipmentsQuery>,
) -> axum::response::Response {
    let shipments = query
        .customer_id
        .and_then(|id| CustomerId::new(id).ok())
        .map(|id| services.list_shipments(&id))
        .unwrap_or_default();

    (StatusCode::OK, Json(shipments)).into_response()
}
