use std::sync::Arc;

use shiprate_core::CustomerId;
use shiprate_infra::{load_region_table, CountryDataError, InMemoryShipmentLedger, ShipmentLedger};
use shiprate_pricing::{PricingEngine, PricingError, RegionTable};
use shiprate_shipments::{Shipment, ShipmentRequest};

use crate::config::ApiConfig;

/// Services shared by every request: one pricing engine, one ledger.
#[derive(Clone)]
pub struct AppServices {
    engine: Arc<PricingEngine>,
    ledger: Arc<dyn ShipmentLedger>,
}

impl AppServices {
    pub fn new(engine: PricingEngine, ledger: Arc<dyn ShipmentLedger>) -> Self {
        Self {
            engine: Arc::new(engine),
            ledger,
        }
    }

    /// Engine over `regions` with an empty in-memory ledger.
    pub fn in_memory(regions: RegionTable) -> Self {
        Self::new(PricingEngine::new(regions), Arc::new(InMemoryShipmentLedger::new()))
    }

    /// Load the country reference file named in `config`.
    pub fn from_config(config: &ApiConfig) -> Result<Self, CountryDataError> {
        let regions = load_region_table(&config.countries_csv)?;
        Ok(Self::in_memory(regions))
    }

    /// Price the request and record it. Nothing is recorded on failure.
    pub fn create_shipment(&self, request: ShipmentRequest) -> Result<Shipment, PricingError> {
        let shipment = Shipment::priced(request, &self.engine)?;
        self.ledger.create(shipment.clone());
        Ok(shipment)
    }

    pub fn list_shipments(&self, customer_id: &CustomerId) -> Vec<Shipment> {
        self.ledger.list_by_customer(customer_id)
    }
}
