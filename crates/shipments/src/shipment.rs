use serde::Serialize;

use shiprate_core::{CountryCode, CustomerId};
use shiprate_pricing::{PricingEngine, PricingError};

/// Unpriced shipment as requested by a customer.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentRequest {
    pub customer_id: CustomerId,
    pub sender: CountryCode,
    pub receiver: CountryCode,
    pub weight: f64,
}

/// Priced shipment record.
///
/// Fields are private: the price is set once from the pricing engine and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    customer_id: CustomerId,
    sender: CountryCode,
    receiver: CountryCode,
    weight: f64,
    price: f64,
}

impl Shipment {
    /// Price `request` and turn it into a record.
    pub fn priced(request: ShipmentRequest, engine: &PricingEngine) -> Result<Self, PricingError> {
        let price = engine.calculate_price(
            request.sender.as_str(),
            request.receiver.as_str(),
            request.weight,
        )?;

        Ok(Self {
            customer_id: request.customer_id,
            sender: request.sender,
            receiver: request.receiver,
            weight: request.weight,
            price,
        })
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn sender(&self) -> &CountryCode {
        &self.sender
    }

    pub fn receiver(&self) -> &CountryCode {
        &self.receiver
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}
