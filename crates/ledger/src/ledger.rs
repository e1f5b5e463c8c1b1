use std::sync::Arc;

use indexmap::IndexMap;
use sweetshop_core::{
    Clock, DomainError, DomainResult, ItemName, Quantity, SystemClock, UnitPrice, ValidationError,
};

use crate::item::{InventoryEntry, InventorySnapshot, StockLevel};
use crate::sale::{SaleRecord, SalesReport};

/// The shop's inventory and sales record.
///
/// All operations are synchronous and all-or-nothing: a call that returns an
/// error has not changed anything. There is no internal locking; callers that
/// share a ledger across threads must serialize access themselves.
///
/// Invariant: `total_revenue` equals the sum of `total_amount` over `sales`,
/// accumulated in sale order.
#[derive(Debug, Clone)]
pub struct Ledger {
    inventory: IndexMap<String, StockLevel>,
    sales: Vec<SaleRecord>,
    total_revenue: f64,
    clock: Arc<dyn Clock>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Empty ledger stamping sales with wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inventory: IndexMap::new(),
            sales: Vec::new(),
            total_revenue: 0.0,
            clock,
        }
    }

    /// Add stock for `name`, creating the entry on first use.
    ///
    /// On restock the quantity accumulates and `price` replaces the stored
    /// price outright; units already on the shelf are not revalued.
    pub fn add_item(&mut self, name: &str, quantity: i64, price: f64) -> DomainResult<InventoryEntry> {
        let name = ItemName::new(name)?;
        let quantity = Quantity::new(quantity)?;
        let price = UnitPrice::new(price)?;

        let name = name.into_inner();
        let entry = match self.inventory.get_mut(&name) {
            Some(level) => {
                // A total that does not fit is refused before anything is written.
                level.quantity = level
                    .quantity
                    .checked_add(quantity.get())
                    .ok_or(ValidationError::InvalidQuantity)?;
                level.price = price.get();
                InventoryEntry::from_level(&name, level)
            }
            None => {
                let level = StockLevel {
                    quantity: quantity.get(),
                    price: price.get(),
                };
                let entry = InventoryEntry::from_level(&name, &level);
                self.inventory.insert(name, level);
                entry
            }
        };

        tracing::debug!(
            item = %entry.name,
            added = quantity.get(),
            quantity = entry.quantity,
            price = entry.unit_price,
            "stock added"
        );
        Ok(entry)
    }

    /// Sell `quantity` units of `name` at its current price.
    pub fn sell_item(&mut self, name: &str, quantity: i64) -> DomainResult<SaleRecord> {
        let name = ItemName::new(name)?;
        let quantity = Quantity::new(quantity)?.get();

        let level = self
            .inventory
            .get_mut(name.as_str())
            .ok_or_else(|| DomainError::not_found(name.as_str()))?;

        if level.quantity < quantity {
            return Err(DomainError::insufficient_stock(
                name.as_str(),
                level.quantity,
                quantity,
            ));
        }

        level.quantity -= quantity;
        let unit_price = level.price;
        let record = SaleRecord {
            name: name.into_inner(),
            quantity,
            unit_price,
            total_amount: unit_price * quantity as f64,
            timestamp: self.clock.now(),
        };

        self.total_revenue += record.total_amount;
        self.sales.push(record.clone());

        tracing::info!(
            item = %record.name,
            quantity = record.quantity,
            total_amount = record.total_amount,
            total_revenue = self.total_revenue,
            "sale recorded"
        );
        Ok(record)
    }

    pub fn inventory_snapshot(&self) -> InventorySnapshot {
        self.inventory.clone()
    }

    pub fn sales_report(&self) -> SalesReport {
        SalesReport {
            total_revenue: self.total_revenue,
            transactions: self.sales.clone(),
        }
    }

    pub fn entry(&self, name: &str) -> Option<InventoryEntry> {
        self.inventory
            .get_key_value(name)
            .map(|(key, level)| InventoryEntry::from_level(key, level))
    }

    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    /// Number of distinct sweets ever stocked (entries are never removed).
    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }
}
