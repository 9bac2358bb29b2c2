//! # Cart Lines
//!
//! The two kinds of line a cart session can hold, and the [`CartLine`] trait
//! that lets one generic session drive both.
//!
//! ## Identity & Ceilings
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Line kind        Key                       Quantity ceiling            │
//! │  ─────────        ───                       ────────────────            │
//! │  LineItem         product_id                none                        │
//! │  BatchLineItem    (product_id, batch_id)    max_qty of the batch        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity and line total are private so they can only move together,
//! through [`CartLine::set_qty`].

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::bill::BillItem;
use crate::money::Money;
use crate::types::{BatchInfo, Product};

/// A line that can live in a [`crate::cart::CartSession`].
pub trait CartLine {
    /// What callers pass to find this line again.
    type Key: ?Sized;

    fn matches(&self, key: &Self::Key) -> bool;

    fn qty(&self) -> i64;

    /// Sets the quantity and recomputes the line total. Callers have already
    /// clamped `qty` into `1..=ceiling`.
    fn set_qty(&mut self, qty: i64);

    /// `qty * price`.
    fn total(&self) -> Money;

    /// Upper bound on quantity, if this line has one.
    fn ceiling(&self) -> Option<i64> {
        None
    }

    /// Frozen copy of this line for a finalized bill.
    fn bill_item(&self) -> BillItem;
}

// =============================================================================
// Plain Line
// =============================================================================

/// One product in a plain cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    /// Name at time of adding (frozen).
    pub name: String,
    /// Unit price at time of adding (frozen).
    pub price: Money,
    qty: i64,
    total: Money,
}

impl LineItem {
    pub(crate) fn from_product(product: &Product, qty: i64) -> Self {
        LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            qty,
            total: product.price.multiply_quantity(qty),
        }
    }
}

impl CartLine for LineItem {
    type Key = str;

    fn matches(&self, product_id: &str) -> bool {
        self.product_id == product_id
    }

    fn qty(&self) -> i64 {
        self.qty
    }

    fn set_qty(&mut self, qty: i64) {
        self.qty = qty;
        self.total = self.price.multiply_quantity(qty);
    }

    fn total(&self) -> Money {
        self.total
    }

    fn bill_item(&self) -> BillItem {
        BillItem {
            product_id: self.product_id.clone(),
            name: self.name.clone(),
            price: self.price,
            qty: self.qty,
            total: self.total,
            batch_no: None,
            expiry_date: None,
        }
    }
}

// =============================================================================
// Batch Line
// =============================================================================

/// Identity of a batch line: the same product from two lots is two lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BatchKey {
    pub product_id: String,
    pub batch_id: String,
}

impl BatchKey {
    pub fn new(product_id: impl Into<String>, batch_id: impl Into<String>) -> Self {
        BatchKey {
            product_id: product_id.into(),
            batch_id: batch_id.into(),
        }
    }
}

/// One product from one stock lot in a batch-aware cart.
///
/// ## Invariant
/// `0 < qty <= max_qty` whenever the line is in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BatchLineItem {
    #[serde(flatten)]
    pub line: LineItem,
    pub batch_id: String,
    pub batch_no: String,
    #[ts(as = "String")]
    pub expiry_date: NaiveDate,
    /// Remaining batch stock, refreshed each time the batch is added again.
    pub max_qty: i64,
}

impl BatchLineItem {
    pub(crate) fn from_batch(product: &Product, batch: &BatchInfo, qty: i64) -> Self {
        BatchLineItem {
            line: LineItem::from_product(product, qty),
            batch_id: batch.batch_id.clone(),
            batch_no: batch.batch_no.clone(),
            expiry_date: batch.expiry_date,
            max_qty: batch.max_qty,
        }
    }

    pub fn key(&self) -> BatchKey {
        BatchKey::new(&self.line.product_id, &self.batch_id)
    }

    /// True when the lot expires on or before `on + days`.
    pub fn expires_within(&self, days: i64, on: NaiveDate) -> bool {
        self.expiry_date <= on + Duration::days(days)
    }
}

impl CartLine for BatchLineItem {
    type Key = BatchKey;

    fn matches(&self, key: &BatchKey) -> bool {
        self.line.product_id == key.product_id && self.batch_id == key.batch_id
    }

    fn qty(&self) -> i64 {
        self.line.qty
    }

    fn set_qty(&mut self, qty: i64) {
        self.line.set_qty(qty);
    }

    fn total(&self) -> Money {
        self.line.total
    }

    fn ceiling(&self) -> Option<i64> {
        Some(self.max_qty)
    }

    fn bill_item(&self) -> BillItem {
        BillItem {
            batch_no: Some(self.batch_no.clone()),
            expiry_date: Some(self.expiry_date),
            ..self.line.bill_item()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(max_qty: i64) -> BatchInfo {
        BatchInfo {
            batch_id: "B1".to_string(),
            batch_no: "LOT-7".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2027, 1, 31).unwrap(),
            qty: 2,
            max_qty,
        }
    }

    #[test]
    fn test_set_qty_recomputes_total() {
        let product = Product::new("p1", "Paracetamol 500mg", Money::from_cents(1250));
        let mut line = LineItem::from_product(&product, 1);
        line.set_qty(4);

        assert_eq!(line.qty(), 4);
        assert_eq!(line.total().cents(), 5000);
    }

    #[test]
    fn test_batch_line_serializes_flat() {
        let product = Product::new("p1", "Amoxicillin 250mg", Money::from_cents(900));
        let line = BatchLineItem::from_batch(&product, &batch(10), 2);
        let json = serde_json::to_value(&line).unwrap();

        assert_eq!(json["productId"], "p1");
        assert_eq!(json["qty"], 2);
        assert_eq!(json["total"], 1800);
        assert_eq!(json["batchNo"], "LOT-7");
        assert_eq!(json["expiryDate"], "2027-01-31");
        assert_eq!(json["maxQty"], 10);
    }

    #[test]
    fn test_batch_line_bill_item_carries_lot() {
        let product = Product::new("p1", "Amoxicillin 250mg", Money::from_cents(900));
        let item = BatchLineItem::from_batch(&product, &batch(10), 3).bill_item();

        assert_eq!(item.batch_no.as_deref(), Some("LOT-7"));
        assert_eq!(item.total.cents(), 2700);
    }

    #[test]
    fn test_batch_key_matching() {
        let product = Product::new("p1", "Amoxicillin 250mg", Money::from_cents(900));
        let line = BatchLineItem::from_batch(&product, &batch(10), 1);

        assert!(line.matches(&BatchKey::new("p1", "B1")));
        assert!(!line.matches(&BatchKey::new("p1", "B2")));
        assert_eq!(line.key(), BatchKey::new("p1", "B1"));
    }
}
