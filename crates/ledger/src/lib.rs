//! Sweet shop ledger: inventory entries, sale records and running revenue.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod item;
pub mod ledger;
pub mod sale;

pub use item::{InventoryEntry, InventorySnapshot, StockLevel};
pub use ledger::Ledger;
pub use sale::{SaleRecord, SalesReport};
