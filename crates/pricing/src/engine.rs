//! Price calculation.

use thiserror::Error;

use crate::class::{RegionClass, WeightClass};
use crate::region::RegionTable;

/// Which side of the shipment a country code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryRole {
    Sender,
    Receiver,
}

impl core::fmt::Display for CountryRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sender => f.write_str("sender"),
            Self::Receiver => f.write_str("receiver"),
        }
    }
}

/// Pricing failure. Always caused by client input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("{role} country {code} doesn't exist")]
    UnknownCountry { role: CountryRole, code: String },
}

impl PricingError {
    /// The country code that could not be resolved.
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownCountry { code, .. } => code,
        }
    }
}

/// Priced shipment with the classification that produced the price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub region_class: RegionClass,
    pub weight_class: WeightClass,
    pub price: f64,
}

/// Computes shipment prices against an injected region table.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    regions: RegionTable,
}

impl PricingEngine {
    pub fn new(regions: RegionTable) -> Self {
        Self { regions }
    }

    /// Classify and price a shipment.
    ///
    /// The sender is resolved before the receiver, so when both codes are
    /// unknown the error names the sender.
    pub fn quote(&self, sender: &str, receiver: &str, weight: f64) -> Result<Quote, PricingError> {
        let sender_region = self.resolve(CountryRole::Sender, sender)?;
        let receiver_region = self.resolve(CountryRole::Receiver, receiver)?;

        let region_class = RegionClass::classify(sender, sender_region, receiver, receiver_region);
        let weight_class = WeightClass::classify(weight);

        Ok(Quote {
            region_class,
            weight_class,
            price: weight_class.base_price() * region_class.multiplier(),
        })
    }

    /// Weight-tier price times region-class multiplier.
    pub fn calculate_price(&self, sender: &str, receiver: &str, weight: f64) -> Result<f64, PricingError> {
        self.quote(sender, receiver, weight).map(|q| q.price)
    }

    fn resolve(&self, role: CountryRole, code: &str) -> Result<&str, PricingError> {
        self.regions
            .resolve(code)
            .map_err(|e| PricingError::UnknownCountry { role, code: e.0 })
    }
}
