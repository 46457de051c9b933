//! Shipment pricing (region classification + weight tiers).
//!
//! Pure, deterministic domain logic: no IO, no HTTP, no storage. The region
//! table is built by the caller and injected into [`PricingEngine`].

pub mod class;
pub mod engine;
pub mod region;

pub use class::{RegionClass, WeightClass, MAX_WEIGHT};
pub use engine::{CountryRole, PricingEngine, PricingError, Quote};
pub use region::{CountryNotFound, RegionTable, RegionTableError, EUROPE};
