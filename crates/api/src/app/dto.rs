use chrono::SecondsFormat;
use serde::Deserialize;
use serde_json::Value;

use sweetshop_core::ValidationError;
use sweetshop_ledger::SalesReport;

// -------------------------
// Request DTOs
// -------------------------
//
// Fields arrive as raw JSON values so that a missing or wrongly-typed field
// is reported with the same message the ledger uses, instead of a generic
// deserialization failure.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddSweetRequest {
    pub name: Value,
    pub quantity: Value,
    pub price: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SellSweetRequest {
    pub name: Value,
    pub quantity: Value,
}

/// Typed form of [`AddSweetRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddSweet {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

/// Typed form of [`SellSweetRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct SellSweet {
    pub name: String,
    pub quantity: i64,
}

impl TryFrom<AddSweetRequest> for AddSweet {
    type Error = ValidationError;

    fn try_from(req: AddSweetRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: name_field(req.name)?,
            quantity: quantity_field(&req.quantity)?,
            price: price_field(&req.price)?,
        })
    }
}

impl TryFrom<SellSweetRequest> for SellSweet {
    type Error = ValidationError;

    fn try_from(req: SellSweetRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: name_field(req.name)?,
            quantity: quantity_field(&req.quantity)?,
        })
    }
}

fn name_field(value: Value) -> Result<String, ValidationError> {
    match value {
        Value::String(name) => Ok(name),
        _ => Err(ValidationError::InvalidName),
    }
}

/// Integers only; `3.0` counts as an integer, `1.5` does not. Range is left to the ledger.
fn quantity_field(value: &Value) -> Result<i64, ValidationError> {
    let Value::Number(n) = value else {
        return Err(ValidationError::InvalidQuantity);
    };
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(ValidationError::InvalidQuantity),
    }
}

fn price_field(value: &Value) -> Result<f64, ValidationError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or(ValidationError::InvalidPrice),
        _ => Err(ValidationError::InvalidPrice),
    }
}

// -------------------------
// Response mapping
// -------------------------

/// `GET /api/sales` body. The record's unit price goes out as `price`.
pub fn sales_report_to_json(report: SalesReport) -> Value {
    serde_json::json!({
        "sales": report.transactions.into_iter().map(|s| serde_json::json!({
            "name": s.name,
            "quantity": s.quantity,
            "price": s.unit_price,
            "totalAmount": s.total_amount,
            "timestamp": s.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        })).collect::<Vec<_>>(),
        "totalSales": report.total_revenue,
    })
}

pub fn success(message: &str) -> Value {
    serde_json::json!({ "success": true, "message": message })
}
