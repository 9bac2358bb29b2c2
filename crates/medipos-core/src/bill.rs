//! # Bills
//!
//! A [`Bill`] is the finalized record of a sale. The core assembles it from
//! the final cart state at checkout; storing it is the caller's job, and the
//! receipt renderer reads it back later.
//!
//! ## Checkout
//! ```text
//! CartSession ──► checkout(details) ──► Bill ──► (external store)
//!                    │                              │
//!                    ├─ empty cart?    EmptyCart    ▼
//!                    └─ cash short?    InsufficientTender
//!                                               render_receipt
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::CartSession;
use crate::error::{CoreError, CoreResult};
use crate::line::CartLine;
use crate::money::Money;
use crate::types::PaymentMode;

/// A line frozen into a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub product_id: String,
    pub name: String,
    pub price: Money,
    pub qty: i64,
    pub total: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub expiry_date: Option<NaiveDate>,
}

/// A completed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    /// Human-facing number assigned by the billing collaborator.
    #[serde(default)]
    pub bill_number: Option<String>,
    pub items: Vec<BillItem>,
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub total: Money,
    #[serde(default)]
    pub payment_mode: PaymentMode,
    #[serde(default)]
    pub amount_received: Option<Money>,
    #[serde(default)]
    pub change: Option<Money>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Bill {
    /// The bill number if one was assigned, otherwise the id.
    pub fn display_number(&self) -> &str {
        self.bill_number
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(self.id.as_str())
    }
}

/// Payment details collected by the tender screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutDetails {
    pub bill_number: Option<String>,
    pub customer_name: Option<String>,
    pub payment_mode: PaymentMode,
    pub amount_received: Option<Money>,
}

impl<L: CartLine> CartSession<L> {
    /// Assembles a bill from the current cart, stamped now.
    ///
    /// The cart itself is left untouched; callers clear it once the bill has
    /// been stored.
    pub fn checkout(&self, details: CheckoutDetails) -> CoreResult<Bill> {
        self.checkout_at(details, Utc::now())
    }

    /// Same as [`CartSession::checkout`] with an explicit timestamp.
    pub fn checkout_at(&self, details: CheckoutDetails, at: DateTime<Utc>) -> CoreResult<Bill> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let totals = self.totals();

        let change = match (details.payment_mode, details.amount_received) {
            (PaymentMode::Cash, Some(received)) => {
                if received < totals.total {
                    return Err(CoreError::InsufficientTender {
                        total: totals.total,
                        received,
                    });
                }
                Some(received - totals.total)
            }
            _ => None,
        };

        Ok(Bill {
            id: Uuid::new_v4().to_string(),
            bill_number: details.bill_number,
            items: self.items().iter().map(CartLine::bill_item).collect(),
            subtotal: totals.subtotal,
            discount: totals.discount,
            tax: totals.tax,
            total: totals.total,
            payment_mode: details.payment_mode,
            amount_received: details.amount_received,
            change,
            customer_name: details.customer_name,
            created_at: at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{BatchCart, Cart};
    use crate::types::{BatchInfo, DiscountSpec, Product, TaxRate};

    fn cart_of_100() -> Cart {
        let mut cart = Cart::with_tax_rate(TaxRate::from_bps(1000));
        cart.add_item(&Product::new("p1", "Cough Syrup", Money::from_cents(10000)));
        cart
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let cart = Cart::new();
        let err = cart.checkout(CheckoutDetails::default()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCart));
    }

    #[test]
    fn test_checkout_cash_computes_change() {
        let cart = cart_of_100();
        let bill = cart
            .checkout(CheckoutDetails {
                bill_number: Some("INV-0001".to_string()),
                amount_received: Some(Money::from_cents(20000)),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(bill.total.cents(), 11000);
        assert_eq!(bill.change, Some(Money::from_cents(9000)));
        assert_eq!(bill.display_number(), "INV-0001");
        assert_eq!(bill.items.len(), 1);
        assert!(Uuid::parse_str(&bill.id).is_ok());
    }

    #[test]
    fn test_checkout_cash_short_fails() {
        let cart = cart_of_100();
        let err = cart
            .checkout(CheckoutDetails {
                amount_received: Some(Money::from_cents(10000)),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, CoreError::InsufficientTender { .. }));
    }

    #[test]
    fn test_checkout_card_has_no_change() {
        let cart = cart_of_100();
        let bill = cart
            .checkout(CheckoutDetails {
                payment_mode: PaymentMode::Card,
                amount_received: Some(Money::from_cents(5)),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(bill.change, None);
        assert_eq!(bill.display_number(), bill.id);
    }

    #[test]
    fn test_checkout_carries_discount_and_batches() {
        let mut cart = BatchCart::new();
        cart.add_item_with_batch(
            &Product::new("p1", "Insulin Pen", Money::from_cents(45000)),
            &BatchInfo {
                batch_id: "B9".to_string(),
                batch_no: "INS-2231".to_string(),
                expiry_date: NaiveDate::from_ymd_opt(2027, 2, 28).unwrap(),
                qty: 2,
                max_qty: 5,
            },
        );
        cart.set_discount(DiscountSpec::fixed(Money::from_cents(5000)));

        let at = DateTime::parse_from_rfc3339("2026-10-19T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let bill = cart.checkout_at(CheckoutDetails::default(), at).unwrap();

        assert_eq!(bill.subtotal.cents(), 90000);
        assert_eq!(bill.discount.cents(), 5000);
        assert_eq!(bill.total.cents(), 85000);
        assert_eq!(bill.items[0].batch_no.as_deref(), Some("INS-2231"));
        assert_eq!(bill.created_at, at);
        // the cart survives checkout until the caller clears it
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_bill_deserializes_with_defaults() {
        let bill: Bill = serde_json::from_value(serde_json::json!({
            "id": "b-1",
            "items": [],
            "subtotal": 0,
            "discount": 0,
            "tax": 0,
            "total": 0,
            "createdAt": "2026-10-19T09:30:00Z"
        }))
        .unwrap();

        assert_eq!(bill.payment_mode, PaymentMode::Cash);
        assert_eq!(bill.bill_number, None);
        assert_eq!(bill.display_number(), "b-1");
    }
}
