//! Per-customer shipment storage.

pub mod in_memory;

pub use in_memory::InMemoryShipmentLedger;

use std::sync::Arc;

use shiprate_core::CustomerId;
use shiprate_shipments::Shipment;

/// Append-only store of shipments keyed by customer.
///
/// Implementations must make `create` and `list_by_customer` linearizable per
/// customer: a list observes either all or none of a concurrent create.
pub trait ShipmentLedger: Send + Sync {
    /// Append `shipment` to its customer's sequence. Never fails.
    fn create(&self, shipment: Shipment);

    /// The customer's shipments in insertion order. Unknown customers yield
    /// an empty sequence.
    fn list_by_customer(&self, customer_id: &CustomerId) -> Vec<Shipment>;
}

impl<S> ShipmentLedger for Arc<S>
where
    S: ShipmentLedger + ?Sized,
{
    fn create(&self, shipment: Shipment) {
        (**self).create(shipment)
    }

    fn list_by_customer(&self, customer_id: &CustomerId) -> Vec<Shipment> {
        (**self).list_by_customer(customer_id)
    }
}
