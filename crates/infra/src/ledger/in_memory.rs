use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use shiprate_core::CustomerId;
use shiprate_shipments::Shipment;

use super::ShipmentLedger;

/// In-memory ledger guarded by a single `RwLock`.
///
/// A customer only gets an entry on its first `create`.
#[derive(Debug, Default)]
pub struct InMemoryShipmentLedger {
    inner: RwLock<HashMap<CustomerId, Vec<Shipment>>>,
}

impl InMemoryShipmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of customers with at least one shipment.
    pub fn customer_count(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl ShipmentLedger for InMemoryShipmentLedger {
    fn create(&self, shipment: Shipment) {
        // The map is only touched by a single push, so a poisoned guard still
        // holds consistent data.
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.entry(shipment.customer_id().clone())
            .or_default()
            .push(shipment);
    }

    fn list_by_customer(&self, customer_id: &CustomerId) -> Vec<Shipment> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(customer_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use shiprate_pricing::{PricingEngine, RegionTable};
    use shiprate_shipments::ShipmentRequest;

    use super::*;

    fn engine() -> PricingEngine {
        let table: RegionTable = [("SE", "Europe"), ("DE", "Europe"), ("US", "Americas")]
            .into_iter()
            .collect();
        PricingEngine::new(table)
    }

    fn customer(id: &str) -> CustomerId {
        CustomerId::new(id).unwrap()
    }

    fn shipment(engine: &PricingEngine, customer_id: &str, weight: f64) -> Shipment {
        Shipment::priced(
            ShipmentRequest {
                customer_id: customer(customer_id),
                sender: "SE".into(),
                receiver: "DE".into(),
                weight,
            },
            engine,
        )
        .unwrap()
    }

    #[test]
    fn unknown_customer_lists_empty_and_is_not_created() {
        let ledger = InMemoryShipmentLedger::new();
        assert!(ledger.list_by_customer(&customer("nobody")).is_empty());
        assert_eq!(ledger.customer_count(), 0);
    }

    #[test]
    fn creates_append_in_order_per_customer() {
        let engine = engine();
        let ledger = InMemoryShipmentLedger::new();

        for (i, w) in [1.0, 12.0, 30.0].into_iter().enumerate() {
            let s = shipment(&engine, "acme", w);
            ledger.create(s.clone());

            let listed = ledger.list_by_customer(&customer("acme"));
            assert_eq!(listed.len(), i + 1);
            assert_eq!(listed.last(), Some(&s));
        }

        let weights: Vec<f64> = ledger
            .list_by_customer(&customer("acme"))
            .iter()
            .map(Shipment::weight)
            .collect();
        assert_eq!(weights, vec![1.0, 12.0, 30.0]);
    }

    #[test]
    fn customers_are_isolated() {
        let engine = engine();
        let ledger = InMemoryShipmentLedger::new();

        ledger.create(shipment(&engine, "a", 1.0));
        ledger.create(shipment(&engine, "b", 2.0));
        ledger.create(shipment(&engine, "a", 3.0));

        assert_eq!(ledger.list_by_customer(&customer("a")).len(), 2);
        assert_eq!(ledger.list_by_customer(&customer("b")).len(), 1);
        assert_eq!(ledger.customer_count(), 2);
    }

    #[test]
    fn listed_sequence_is_a_snapshot() {
        let engine = engine();
        let ledger = InMemoryShipmentLedger::new();
        ledger.create(shipment(&engine, "acme", 1.0));

        let before = ledger.list_by_customer(&customer("acme"));
        ledger.create(shipment(&engine, "acme", 2.0));

        assert_eq!(before.len(), 1);
        assert_eq!(ledger.list_by_customer(&customer("acme")).len(), 2);
    }

    #[test]
    fn concurrent_creates_lose_no_writes() {
        let engine = Arc::new(engine());
        let ledger = Arc::new(InMemoryShipmentLedger::new());
        let threads = 8;
        let per_thread = 200;

        thread::scope(|scope| {
            for t in 0..threads {
                let engine = engine.clone();
                let ledger = ledger.clone();
                scope.spawn(move || {
                    let own = format!("customer-{t}");
                    for i in 0..per_thread {
                        ledger.create(shipment(&engine, &own, i as f64 + 1.0));
                        ledger.create(shipment(&engine, "shared", 1.0));
                        let _ = ledger.list_by_customer(&customer("shared"));
                    }
                });
            }
        });

        assert_eq!(ledger.list_by_customer(&customer("shared")).len(), threads * per_thread);
        for t in 0..threads {
            let own = ledger.list_by_customer(&customer(&format!("customer-{t}")));
            assert_eq!(own.len(), per_thread);
            // Per-thread order is preserved inside each customer sequence.
            assert!(own.windows(2).all(|w| w[0].weight() < w[1].weight()));
        }
    }

    #[test]
    fn works_behind_trait_object() {
        let engine = engine();
        let ledger: Arc<dyn ShipmentLedger> = Arc::new(InMemoryShipmentLedger::new());
        ledger.create(shipment(&engine, "acme", 5.0));
        assert_eq!(ledger.list_by_customer(&customer("acme"))[0].price(), 150.0);
    }
}
