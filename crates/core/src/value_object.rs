//! Value objects: validated inputs, equality by value.
//!
//! Each type can only be constructed through its fallible constructor, so a
//! value in hand is already known to satisfy the ledger's input rules.

use serde::Serialize;

use crate::error::ValidationError;

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances holding the same values are
/// the same value. They are immutable: to "change" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Name of a sweet; the unique key of an inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Any non-empty string is accepted as-is (no trimming or case folding).
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::InvalidName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for ItemName {}

/// Strictly positive unit count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub fn new(quantity: i64) -> Result<Self, ValidationError> {
        if quantity <= 0 {
            return Err(ValidationError::InvalidQuantity);
        }
        Ok(Self(quantity as u64))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl ValueObject for Quantity {}

/// Strictly positive, finite price per unit.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct UnitPrice(f64);

impl UnitPrice {
    /// NaN and infinities are rejected along with zero and negatives.
    pub fn new(price: f64) -> Result<Self, ValidationError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(Self(price))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl ValueObject for UnitPrice {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(ItemName::new(""), Err(ValidationError::InvalidName));
        assert_eq!(ItemName::new("Candy").unwrap().as_str(), "Candy");
    }

    #[test]
    fn quantity_must_be_strictly_positive() {
        assert_eq!(Quantity::new(0), Err(ValidationError::InvalidQuantity));
        assert_eq!(Quantity::new(-1), Err(ValidationError::InvalidQuantity));
        assert_eq!(Quantity::new(i64::MIN), Err(ValidationError::InvalidQuantity));
        assert_eq!(Quantity::new(3).unwrap().get(), 3);
    }

    #[test]
    fn price_must_be_positive_and_finite() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(UnitPrice::new(bad), Err(ValidationError::InvalidPrice));
        }
        assert_eq!(UnitPrice::new(2.5).unwrap().get(), 2.5);
    }
}
