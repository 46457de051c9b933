//! Shipments domain module.
//!
//! A [`Shipment`] is the priced, immutable record kept in the ledger. It can
//! only be produced by pricing a [`ShipmentRequest`].

pub mod shipment;

pub use shipment::{Shipment, ShipmentRequest};
