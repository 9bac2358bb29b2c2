//! # Error Types
//!
//! Cart mutations never fail, so the errors here only come from the edges of
//! the core: assembling a bill at checkout, and validating configuration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  medipos-core                                                           │
//! │  ├── CoreError        - checkout assembly failures                      │
//! │  └── ValidationError  - configuration field checks                      │
//! │                                                                         │
//! │  medipos-cli                                                            │
//! │  └── CliError         - I/O, JSON, config, wraps CoreError              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::Money;

/// Checkout and domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A bill cannot be assembled from a cart with no lines.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Cash received does not cover the total.
    #[error("Amount received {received} is less than the total {total}")]
    InsufficientTender { total: Money, received: Money },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Input validation errors for configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

/// Operator-entered amount that is not a decimal with at most two places.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid amount '{0}'")]
pub struct ParseMoneyError(pub String);

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientTender {
            total: Money::from_cents(11000),
            received: Money::from_cents(10000),
        };
        assert_eq!(
            err.to_string(),
            "Amount received 100.00 is less than the total 110.00"
        );
        assert_eq!(CoreError::EmptyCart.to_string(), "Cannot check out an empty cart");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let err: CoreError = ValidationError::Required {
            field: "shop name".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: shop name is required");
    }
}
