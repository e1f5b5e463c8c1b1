use std::sync::{Mutex, MutexGuard, PoisonError};

use sweetshop_core::DomainResult;
use sweetshop_ledger::{InventoryEntry, InventorySnapshot, Ledger, SaleRecord, SalesReport};

use crate::config::ApiConfig;

/// Stock the shop opens with when seeding is enabled: (name, quantity, price).
pub const DEFAULT_CATALOGUE: [(&str, i64, f64); 5] = [
    ("Chocolate", 50, 2.50),
    ("Candy", 100, 1.00),
    ("Lollipop", 75, 0.75),
    ("Gummies", 60, 2.00),
    ("Caramel", 40, 1.75),
];

/// The single ledger this process serves, behind a mutex.
///
/// The ledger does no locking of its own; every handler goes through here so
/// each ledger call runs alone. The guard never lives across an `.await`.
#[derive(Debug)]
pub struct AppServices {
    ledger: Mutex<Ledger>,
}

impl AppServices {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
        }
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        // Ledger operations are all-or-nothing, so a panicking holder cannot
        // leave it half-updated.
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_sweet(&self, name: &str, quantity: i64, price: f64) -> DomainResult<InventoryEntry> {
        self.ledger().add_item(name, quantity, price)
    }

    pub fn sell_sweet(&self, name: &str, quantity: i64) -> DomainResult<SaleRecord> {
        self.ledger().sell_item(name, quantity)
    }

    pub fn inventory(&self) -> InventorySnapshot {
        self.ledger().inventory_snapshot()
    }

    pub fn sales_report(&self) -> SalesReport {
        self.ledger().sales_report()
    }
}

pub fn seed_catalogue(ledger: &mut Ledger) -> DomainResult<()> {
    for (name, quantity, price) in DEFAULT_CATALOGUE {
        ledger.add_item(name, quantity, price)?;
    }
    tracing::info!(items = ledger.len(), "seeded default catalogue");
    Ok(())
}

/// Build the services for this process from its configuration.
pub fn build_services(config: &ApiConfig) -> DomainResult<AppServices> {
    let mut ledger = Ledger::new();
    if config.seed {
        seed_catalogue(&mut ledger)?;
    }
    Ok(AppServices::new(ledger))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_stocks_default_catalogue() {
        let mut ledger = Ledger::new();
        seed_catalogue(&mut ledger).unwrap();

        let snapshot = ledger.inventory_snapshot();
        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot["Chocolate"].quantity, 50);
        assert_eq!(snapshot["Lollipop"].price, 0.75);
        assert!(ledger.sales_report().transactions.is_empty());
    }

    #[test]
    fn seeded_inventory_lists_sweets_in_catalogue_order() {
        let mut ledger = Ledger::new();
        seed_catalogue(&mut ledger).unwrap();

        let names: Vec<_> = ledger.inventory_snapshot().into_keys().collect();
        assert_eq!(names, ["Chocolate", "Candy", "Lollipop", "Gummies", "Caramel"]);
    }

    #[test]
    fn build_services_honours_seed_flag() {
        let seeded = build_services(&ApiConfig::default()).unwrap();
        assert_eq!(seeded.inventory().len(), DEFAULT_CATALOGUE.len());

        let empty = build_services(&ApiConfig {
            seed: false,
            ..ApiConfig::default()
        })
        .unwrap();
        assert!(empty.inventory().is_empty());
    }

    #[test]
    fn services_route_calls_to_one_ledger() {
        let services = AppServices::new(Ledger::new());
        services.add_sweet("Toffee", 4, 0.5).unwrap();
        services.sell_sweet("Toffee", 3).unwrap();

        assert_eq!(services.inventory()["Toffee"].quantity, 1);
        assert_eq!(services.sales_report().total_revenue, 1.5);
    }
}
