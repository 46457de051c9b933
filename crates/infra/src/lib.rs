//! Infrastructure layer: shipment storage and reference-data loading.

pub mod countries;
pub mod ledger;

pub use countries::{load_region_table, read_region_table, CountryDataError};
pub use ledger::{InMemoryShipmentLedger, ShipmentLedger};
