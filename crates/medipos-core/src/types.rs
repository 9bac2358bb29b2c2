//! # Domain Types
//!
//! Records the core receives from its collaborators, plus the small value
//! types (tax rate, discount, payment mode) that configure a cart session.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   BatchInfo     │   │    ShopInfo     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  batch_id       │   │  name?          │       │
//! │  │  name           │   │  batch_no       │   │  address?       │       │
//! │  │  price (Money)  │   │  expiry_date    │   │  phone?         │       │
//! │  └─────────────────┘   │  qty / max_qty  │   └─────────────────┘       │
//! │   catalog lookup       └─────────────────┘    tenant settings          │
//! │                         stock lookup                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │  DiscountSpec   │   │  PaymentMode    │       │
//! │  │  bps (i32)      │   │  Fixed(Money)   │   │  Cash / Card    │       │
//! │  │  1000 = 10%     │   │  Percent(bps)   │   │  Upi / Online   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Flat tax rate for a whole transaction, in basis points.
///
/// 1 basis point = 0.01%, so `1000` is 10%. Nominally within `[0, 10000)`,
/// but the cart accepts any value; range checks belong to configuration
/// (see [`crate::validation::validate_tax_rate_bps`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(i32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: i32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage such as `18.0` or `12.5`.
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as i32)
    }

    #[inline]
    pub const fn bps(&self) -> i32 {
        self.0
    }

    /// The rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Tax owed on `amount`, rounded to one minor unit.
    pub fn apply(&self, amount: Money) -> Money {
        amount.scale_bps(i64::from(self.0))
    }
}

// =============================================================================
// Discount
// =============================================================================

/// Cart-level discount configuration.
///
/// Serialized adjacently tagged. On the wire a percent `amount` is in percent
/// points (`{"kind": "percent", "amount": 10}` is 10%, `12.5` is allowed);
/// in memory it is basis points of the raw subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum DiscountSpec {
    /// A flat amount off the subtotal.
    Fixed(Money),
    /// A share of the subtotal in basis points (1000 = 10%).
    Percent(
        #[serde(with = "percent_points")]
        #[ts(type = "number")]
        i64,
    ),
}

impl DiscountSpec {
    /// No discount: a fixed amount of zero.
    pub const NONE: DiscountSpec = DiscountSpec::Fixed(Money::zero());

    #[inline]
    pub const fn fixed(amount: Money) -> Self {
        DiscountSpec::Fixed(amount)
    }

    /// Percent discount from whole percent points (`10` = 10%).
    #[inline]
    pub const fn percent(pct: i64) -> Self {
        DiscountSpec::Percent(pct * 100)
    }

    #[inline]
    pub const fn percent_bps(bps: i64) -> Self {
        DiscountSpec::Percent(bps)
    }

    /// The discount amount against a raw subtotal.
    ///
    /// Percent discounts never compound: they always read the undiscounted
    /// subtotal passed in here. Negative amounts pass through untouched.
    pub fn amount_for(&self, subtotal: Money) -> Money {
        match *self {
            DiscountSpec::Fixed(amount) => amount,
            DiscountSpec::Percent(bps) => subtotal.scale_bps(bps),
        }
    }

    pub fn is_none(&self) -> bool {
        match *self {
            DiscountSpec::Fixed(amount) => amount.is_zero(),
            DiscountSpec::Percent(bps) => bps == 0,
        }
    }
}

impl Default for DiscountSpec {
    fn default() -> Self {
        DiscountSpec::NONE
    }
}

/// Basis points in memory, percent points in JSON.
mod percent_points {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bps: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        if bps % 100 == 0 {
            serializer.serialize_i64(bps / 100)
        } else {
            serializer.serialize_f64(*bps as f64 / 100.0)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let pct = f64::deserialize(deserializer)?;
        if !pct.is_finite() {
            return Err(D::Error::custom("percent discount must be a finite number"));
        }
        Ok((pct * 100.0).round() as i64)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable product as supplied by the catalog/search collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Unit price, non-negative.
    pub price: Money,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Batch
// =============================================================================

/// A stock lot picked by the operator for sale, supplied by the inventory
/// collaborator at the moment of selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BatchInfo {
    pub batch_id: String,
    /// Printed lot number.
    pub batch_no: String,
    #[ts(as = "String")]
    pub expiry_date: NaiveDate,
    /// Quantity requested from this batch.
    pub qty: i64,
    /// Remaining stock in this batch when it was offered to the cart.
    pub max_qty: i64,
}

impl BatchInfo {
    /// True once `on` is past the expiry date. Informational only: the cart
    /// never refuses an expired batch.
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        on > self.expiry_date
    }

    /// True when the batch expires on or before `on + days`.
    pub fn expires_within(&self, days: i64, on: NaiveDate) -> bool {
        self.expiry_date <= on + Duration::days(days)
    }
}

// =============================================================================
// Payment Mode
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    #[default]
    Cash,
    Card,
    Upi,
    Online,
}

impl PaymentMode {
    /// Label printed on receipts.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "CASH",
            PaymentMode::Card => "CARD",
            PaymentMode::Upi => "UPI",
            PaymentMode::Online => "ONLINE",
        }
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMode::Cash),
            "card" => Ok(PaymentMode::Card),
            "upi" => Ok(PaymentMode::Upi),
            "online" => Ok(PaymentMode::Online),
            other => Err(format!("unknown payment mode '{other}'")),
        }
    }
}

// =============================================================================
// Shop Info
// =============================================================================

/// Shop metadata printed in the receipt header.
///
/// Every field is optional; the receipt renderer falls back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopInfo {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Symbol placed before every amount (default `₹`).
    pub currency_symbol: Option<String>,
    /// Offset applied to bill timestamps before formatting (default UTC).
    pub utc_offset_minutes: Option<i32>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(12.5);
        assert_eq!(rate.bps(), 1250);
        assert!((rate.percentage() - 12.5).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_apply() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.apply(Money::from_cents(10000)).cents(), 1000);
        assert_eq!(rate.apply(Money::from_cents(-10000)).cents(), -1000);
    }

    #[test]
    fn test_discount_default_is_zero_fixed() {
        assert_eq!(DiscountSpec::default(), DiscountSpec::Fixed(Money::zero()));
        assert!(DiscountSpec::default().is_none());
    }

    #[test]
    fn test_discount_amounts() {
        let subtotal = Money::from_cents(10000);
        assert_eq!(DiscountSpec::percent(10).amount_for(subtotal).cents(), 1000);
        assert_eq!(
            DiscountSpec::fixed(Money::from_cents(250)).amount_for(subtotal).cents(),
            250
        );
        assert_eq!(
            DiscountSpec::fixed(Money::from_cents(-250)).amount_for(subtotal).cents(),
            -250
        );
    }

    #[test]
    fn test_discount_serde_shape() {
        let json = serde_json::to_value(DiscountSpec::percent(10)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "percent", "amount": 10 }));

        let json = serde_json::to_value(DiscountSpec::percent_bps(1250)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "percent", "amount": 12.5 }));

        let fixed: DiscountSpec =
            serde_json::from_value(serde_json::json!({ "kind": "fixed", "amount": 500 })).unwrap();
        assert_eq!(fixed, DiscountSpec::fixed(Money::from_cents(500)));
    }

    #[test]
    fn test_percent_discount_reads_whole_percent() {
        let ten: DiscountSpec =
            serde_json::from_value(serde_json::json!({ "kind": "percent", "amount": 10 })).unwrap();
        assert_eq!(ten, DiscountSpec::percent(10));
        assert_eq!(ten.amount_for(Money::from_cents(10000)).cents(), 1000);

        let fractional: DiscountSpec =
            serde_json::from_value(serde_json::json!({ "kind": "percent", "amount": 12.5 }))
                .unwrap();
        assert_eq!(fractional, DiscountSpec::percent_bps(1250));
    }

    #[test]
    fn test_batch_expiry_helpers() {
        let batch = BatchInfo {
            batch_id: "b1".to_string(),
            batch_no: "LOT-42".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            qty: 1,
            max_qty: 10,
        };
        let day = |m, d| NaiveDate::from_ymd_opt(2026, m, d).unwrap();

        assert!(!batch.is_expired(day(3, 31)));
        assert!(batch.is_expired(day(4, 1)));
        assert!(batch.expires_within(30, day(3, 1)));
        assert!(!batch.expires_within(30, day(1, 1)));
    }

    #[test]
    fn test_payment_mode_parse_and_default() {
        assert_eq!(PaymentMode::default(), PaymentMode::Cash);
        assert_eq!("UPI".parse::<PaymentMode>().unwrap(), PaymentMode::Upi);
        assert!("cheque".parse::<PaymentMode>().is_err());
    }
}
