//! # Tickets
//!
//! A ticket is a recorded sequence of scans from the till, saved as JSON:
//!
//! ```json
//! {
//!   "taxRateBps": 1200,
//!   "discount": { "kind": "percent", "amount": 10 },
//!   "lines": [
//!     { "product": { "id": "p1", "name": "ORS", "price": 2000 }, "qty": 3 },
//!     { "product": { "id": "p2", "name": "Insulin", "price": 65000 },
//!       "batch": { "batchId": "b1", "batchNo": "GLA-09", "expiryDate": "2027-09-30",
//!                  "qty": 2, "maxQty": 4 } }
//!   ]
//! }
//! ```
//!
//! Replaying a ticket drives the same cart operations the till UI would.
//! Tickets either carry a batch on every line (batch cart) or on none
//! (plain cart).

use std::fs;
use std::path::Path;

use medipos_core::{
    BatchCart, Bill, BatchInfo, Cart, CheckoutDetails, CoreResult, DiscountSpec, Product,
    QtyAdjustment, TaxRate, Totals,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Overrides the configured default tax rate.
    #[serde(default)]
    pub tax_rate_bps: Option<i32>,
    #[serde(default)]
    pub discount: Option<DiscountSpec>,
    #[serde(default)]
    pub lines: Vec<TicketLine>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketLine {
    pub product: Product,
    #[serde(default)]
    pub batch: Option<BatchInfo>,
    /// Units scanned on this line (default 1). Plain lines for the same product
    /// accumulate. Batch lines use `batch.qty` instead.
    #[serde(default)]
    pub qty: Option<i64>,
}

impl Ticket {
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|e| CliError::json(path, e))
    }
}

/// A cart rebuilt from a ticket.
#[derive(Debug)]
pub enum ReplayedCart {
    Plain(Cart),
    Batch(BatchCart),
}

impl ReplayedCart {
    pub fn totals(&self) -> Totals {
        match self {
            ReplayedCart::Plain(cart) => cart.totals(),
            ReplayedCart::Batch(cart) => cart.totals(),
        }
    }

    pub fn checkout(&self, details: CheckoutDetails) -> CoreResult<Bill> {
        match self {
            ReplayedCart::Plain(cart) => cart.checkout(details),
            ReplayedCart::Batch(cart) => cart.checkout(details),
        }
    }

    pub fn line_count(&self) -> usize {
        match self {
            ReplayedCart::Plain(cart) => cart.line_count(),
            ReplayedCart::Batch(cart) => cart.line_count(),
        }
    }
}

/// Replays `ticket` into a fresh cart.
///
/// Clamped quantities are not errors; they are logged so the operator can
/// see that a lot ran short.
pub fn replay(ticket: &Ticket, default_tax_rate: TaxRate) -> CliResult<ReplayedCart> {
    let tax_rate = ticket
        .tax_rate_bps
        .map(TaxRate::from_bps)
        .unwrap_or(default_tax_rate);
    let batched = ticket.lines.iter().any(|line| line.batch.is_some());

    let mut replayed = if batched {
        let mut cart = BatchCart::with_tax_rate(tax_rate);
        for (index, line) in ticket.lines.iter().enumerate() {
            let batch = line
                .batch
                .as_ref()
                .ok_or(CliError::MixedTicket { index })?;
            let adjustment = cart.add_item_with_batch(&line.product, batch);
            report(&line.product, Some(&batch.batch_no), adjustment);
        }
        ReplayedCart::Batch(cart)
    } else {
        let mut cart = Cart::with_tax_rate(tax_rate);
        for line in &ticket.lines {
            cart.add_item(&line.product);
            if let Some(qty) = line.qty {
                let target = cart
                    .item_qty(line.product.id.as_str())
                    .saturating_sub(1)
                    .saturating_add(qty);
                if let Some(adjustment) = cart.update_qty(line.product.id.as_str(), target) {
                    report(&line.product, None, adjustment);
                }
            }
        }
        ReplayedCart::Plain(cart)
    };

    if let Some(discount) = ticket.discount {
        match &mut replayed {
            ReplayedCart::Plain(cart) => cart.set_discount(discount),
            ReplayedCart::Batch(cart) => cart.set_discount(discount),
        }
    }

    debug!(
        lines = replayed.line_count(),
        batched,
        tax_bps = tax_rate.bps(),
        "Ticket replayed"
    );
    Ok(replayed)
}

fn report(product: &Product, batch_no: Option<&str>, adjustment: QtyAdjustment) {
    if adjustment.was_clamped() {
        warn!(
            product_id = %product.id,
            batch_no = batch_no.unwrap_or("-"),
            requested = adjustment.requested,
            applied = adjustment.applied,
            "Quantity capped at available stock"
        );
    } else if adjustment.removed() {
        debug!(product_id = %product.id, "Line removed");
    }
}
