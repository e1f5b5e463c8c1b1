//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Input shape/range failure for a single field.
///
/// The display strings are user-visible: the HTTP layer returns them verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Sweet name must be a non-empty string")]
    InvalidName,

    #[error("Quantity must be a positive integer")]
    InvalidQuantity,

    #[error("Price must be a positive number")]
    InvalidPrice,
}

/// Domain-level error.
///
/// Every variant is a caller/input error: the failing operation leaves the
/// ledger untouched and retrying the same call fails the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty name, zero quantity).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No inventory entry exists under this name.
    #[error("Sweet '{name}' not found in inventory")]
    NotFound { name: String },

    /// The entry holds fewer units than requested.
    #[error("Insufficient quantity of '{name}' in inventory")]
    InsufficientStock {
        name: String,
        available: u64,
        requested: u64,
    },
}

impl DomainError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn insufficient_stock(name: impl Into<String>, available: u64, requested: u64) -> Self {
        Self::InsufficientStock {
            name: name.into(),
            available,
            requested,
        }
    }

    /// Stable machine-readable code, used for structured logging.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(ValidationError::InvalidName) => "invalid_name",
            DomainError::Validation(ValidationError::InvalidQuantity) => "invalid_quantity",
            DomainError::Validation(ValidationError::InvalidPrice) => "invalid_price",
            DomainError::NotFound { .. } => "not_found",
            DomainError::InsufficientStock { .. } => "insufficient_stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_user_facing_wording() {
        assert_eq!(
            DomainError::from(ValidationError::InvalidName).to_string(),
            "Sweet name must be a non-empty string"
        );
        assert_eq!(
            DomainError::not_found("Lollipop").to_string(),
            "Sweet 'Lollipop' not found in inventory"
        );
        assert_eq!(
            DomainError::insufficient_stock("Chocolate", 10, 15).to_string(),
            "Insufficient quantity of 'Chocolate' in inventory"
        );
    }

    #[test]
    fn codes_are_distinct_per_validation_reason() {
        let codes = [
            DomainError::from(ValidationError::InvalidName).code(),
            DomainError::from(ValidationError::InvalidQuantity).code(),
            DomainError::from(ValidationError::InvalidPrice).code(),
        ];
        assert_eq!(codes, ["invalid_name", "invalid_quantity", "invalid_price"]);
    }
}
