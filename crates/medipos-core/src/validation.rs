//! # Validation Module
//!
//! Checks for operator configuration (shop details, default tax rate).
//!
//! Cart operations do not go through here: they accept any input and clamp.
//! These validators guard the settings a host loads once at startup, so a
//! typo in the environment fails loudly instead of printing odd receipts.
//!
//! ```rust
//! use medipos_core::validation::{validate_shop_name, validate_tax_rate_bps};
//!
//! assert!(validate_shop_name("City Care Pharmacy").is_ok());
//! assert!(validate_tax_rate_bps(1800).is_ok());
//! assert!(validate_tax_rate_bps(10_000).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_SHOP_FIELD_LEN: usize = 200;

/// Shop name: required, at most 200 characters.
pub fn validate_shop_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "shop name".to_string(),
        });
    }

    validate_shop_field("shop name", name)
}

/// Optional shop fields (address, phone): at most 200 characters.
pub fn validate_shop_field(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().chars().count() > MAX_SHOP_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_SHOP_FIELD_LEN,
        });
    }
    Ok(())
}

/// Default tax rate: within `[0, 10000)` basis points, i.e. below 100%.
pub fn validate_tax_rate_bps(bps: i32) -> ValidationResult<()> {
    if !(0..10_000).contains(&bps) {
        return Err(ValidationError::OutOfRange {
            field: "tax rate (bps)".to_string(),
            min: 0,
            max: 9_999,
        });
    }
    Ok(())
}

/// UTC offset for receipt timestamps: within ±14 hours.
pub fn validate_utc_offset_minutes(minutes: i32) -> ValidationResult<()> {
    if !(-14 * 60..=14 * 60).contains(&minutes) {
        return Err(ValidationError::OutOfRange {
            field: "utc offset (minutes)".to_string(),
            min: -14 * 60,
            max: 14 * 60,
        });
    }
    Ok(())
}
