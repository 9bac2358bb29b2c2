//! # Configuration
//!
//! Operator settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MEDIPOS_*`)
//! 2. Defaults (this file)
//!
//! | Variable                      | Meaning                            |
//! |-------------------------------|------------------------------------|
//! | `MEDIPOS_SHOP_NAME`           | Receipt header                     |
//! | `MEDIPOS_SHOP_ADDRESS`        | Receipt header, optional           |
//! | `MEDIPOS_SHOP_PHONE`          | Receipt header, optional           |
//! | `MEDIPOS_CURRENCY_SYMBOL`     | Amount prefix, default `₹`         |
//! | `MEDIPOS_UTC_OFFSET_MINUTES`  | Receipt clock, default `330` (IST) |
//! | `MEDIPOS_TAX_RATE`            | Default tax in percent, e.g. `12`  |
//! | `MEDIPOS_RECEIPT_DIR`         | Where receipts are written         |

use std::path::PathBuf;

use directories::ProjectDirs;
use medipos_core::validation::{
    validate_shop_field, validate_shop_name, validate_tax_rate_bps, validate_utc_offset_minutes,
};
use medipos_core::{ShopInfo, TaxRate, ValidationError};
use serde::Serialize;

use crate::error::ConfigError;

pub const ENV_PREFIX: &str = "MEDIPOS_";

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Printed on every receipt.
    pub shop: ShopInfo,

    /// Tax rate a fresh cart starts with. Tickets may override it.
    pub default_tax_rate: TaxRate,

    /// Directory receipts are written into.
    pub receipt_dir: PathBuf,
}

impl Default for ConfigState {
    /// Development defaults: a generic store in IST with no tax.
    fn default() -> Self {
        ConfigState {
            shop: ShopInfo {
                name: Some("MediPOS Dev Pharmacy".to_string()),
                address: None,
                phone: None,
                currency_symbol: Some("₹".to_string()),
                utc_offset_minutes: Some(330),
            },
            default_tax_rate: TaxRate::zero(),
            receipt_dir: default_receipt_dir(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from any key lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            let key = format!("{ENV_PREFIX}{name}");
            lookup(&key).map(|value| (key, value))
        };
        let mut config = ConfigState::default();

        if let Some((key, name)) = var("SHOP_NAME") {
            validate_shop_name(&name).map_err(|source| invalid(&key, source))?;
            config.shop.name = Some(name.trim().to_string());
        }

        if let Some((key, address)) = var("SHOP_ADDRESS") {
            validate_shop_field("shop address", &address).map_err(|source| invalid(&key, source))?;
            config.shop.address = Some(address);
        }

        if let Some((key, phone)) = var("SHOP_PHONE") {
            validate_shop_field("shop phone", &phone).map_err(|source| invalid(&key, source))?;
            config.shop.phone = Some(phone);
        }

        if let Some((_, symbol)) = var("CURRENCY_SYMBOL") {
            config.shop.currency_symbol = Some(symbol);
        }

        if let Some((key, raw)) = var("UTC_OFFSET_MINUTES") {
            let minutes: i32 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: key.clone(),
                value: raw.clone(),
            })?;
            validate_utc_offset_minutes(minutes).map_err(|source| invalid(&key, source))?;
            config.shop.utc_offset_minutes = Some(minutes);
        }

        if let Some((key, raw)) = var("TAX_RATE") {
            let pct: f64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|pct: &f64| pct.is_finite())
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: key.clone(),
                    value: raw.clone(),
                })?;
            let rate = TaxRate::from_percentage(pct);
            validate_tax_rate_bps(rate.bps()).map_err(|source| invalid(&key, source))?;
            config.default_tax_rate = rate;
        }

        if let Some((_, dir)) = var("RECEIPT_DIR") {
            config.receipt_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

fn invalid(key: &str, source: ValidationError) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        source,
    }
}

/// Platform data directory for receipts.
///
/// - **macOS**: `~/Library/Application Support/com.medipos.till/receipts`
/// - **Windows**: `%APPDATA%\medipos\till\data\receipts`
/// - **Linux**: `~/.local/share/till/receipts`
///
/// Falls back to `./receipts` when no home directory is known.
fn default_receipt_dir() -> PathBuf {
    ProjectDirs::from("com", "medipos", "till")
        .map(|dirs| dirs.data_dir().join("receipts"))
        .unwrap_or_else(|| PathBuf::from("receipts"))
}
