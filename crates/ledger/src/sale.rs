use chrono::{DateTime, Utc};
use serde::Serialize;

/// One completed sale (immutable fact).
///
/// `unit_price` is the entry's price at the moment of sale; later restocks at a
/// different price do not touch existing records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub name: String,
    pub quantity: u64,
    pub unit_price: f64,
    pub total_amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// Running revenue plus every sale in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub total_revenue: f64,
    pub transactions: Vec<SaleRecord>,
}
