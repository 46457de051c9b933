use serde::Deserialize;

use shiprate_core::{CountryCode, CustomerId, DomainError};
use shiprate_shipments::ShipmentRequest;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /shipments`.
///
/// Missing and `null` fields take their zero value. A client-sent `price` is
/// not a field here and is dropped during deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateShipmentRequest {
    pub customer_id: Option<String>,
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub weight: Option<f64>,
}

impl CreateShipmentRequest {
    pub fn into_domain(self) -> Result<ShipmentRequest, DomainError> {
        Ok(ShipmentRequest {
            customer_id: CustomerId::new(self.customer_id.unwrap_or_default())?,
            sender: CountryCode::new(self.sender.unwrap_or_default()),
            receiver: CountryCode::new(self.receiver.unwrap_or_default()),
            weight: self.weight.unwrap_or_default(),
        })
    }
}

/// Query of `GET /shipments`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListShipmentsQuery {
    pub customer_id: Option<String>,
}
