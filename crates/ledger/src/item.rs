use indexmap::IndexMap;
use serde::Serialize;

/// Held quantity and current unit price of one sweet.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct StockLevel {
    pub quantity: u64,
    pub price: f64,
}

/// Inventory entry as returned by `Ledger::add_item`: the stock level plus its key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryEntry {
    pub name: String,
    pub quantity: u64,
    #[serde(rename = "price")]
    pub unit_price: f64,
}

impl InventoryEntry {
    pub(crate) fn from_level(name: &str, level: &StockLevel) -> Self {
        Self {
            name: name.to_string(),
            quantity: level.quantity,
            unit_price: level.price,
        }
    }
}

/// Independent copy of the inventory, keyed by name in the order each sweet
/// was first stocked.
pub type InventorySnapshot = IndexMap<String, StockLevel>;
