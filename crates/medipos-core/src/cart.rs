//! # Cart Sessions
//!
//! One generic cart engine for both till flavours:
//!
//! - [`Cart`] = `CartSession<LineItem>`: lines keyed by product, no ceiling.
//! - [`BatchCart`] = `CartSession<BatchLineItem>`: lines keyed by
//!   (product, batch), quantities capped at the batch's remaining stock.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  new() ──► add / update / increment / decrement / remove ──► checkout  │
//! │   ▲                         │                                   │       │
//! │   │                     totals()  (derived on every read)       │       │
//! │   │                                                             ▼       │
//! │   └──────────────────────── clear_cart() ◄──────────────── Bill stored │
//! │                                                                         │
//! │  clear_cart() drops lines and discount; the tax rate is an operator    │
//! │  setting and survives.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Never Fails
//! Every mutation is total. Unknown keys are no-ops (`None`), quantities at or
//! below zero remove the line, and quantities above a ceiling are clamped.
//! The returned [`QtyAdjustment`] tells the caller what actually happened so
//! the UI can warn the operator without interrupting the sale.
//!
//! The session is a plain owned value. Hosts that share one between threads
//! wrap it in their own `Arc<Mutex<_>>`.

use serde::Serialize;
use ts_rs::TS;

use crate::line::{BatchLineItem, CartLine, LineItem};
use crate::money::Money;
use crate::totals::{compute_totals, Totals};
use crate::types::{BatchInfo, DiscountSpec, Product, TaxRate};

/// Plain retail cart.
pub type Cart = CartSession<LineItem>;

/// Batch-aware cart for lot-tracked, expiring stock.
pub type BatchCart = CartSession<BatchLineItem>;

// =============================================================================
// Quantity Adjustment
// =============================================================================

/// What a quantity mutation asked for versus what the cart applied.
///
/// `applied == 0` means the line is no longer in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QtyAdjustment {
    pub requested: i64,
    pub applied: i64,
}

impl QtyAdjustment {
    fn exact(qty: i64) -> Self {
        QtyAdjustment {
            requested: qty,
            applied: qty,
        }
    }

    /// True when a ceiling cut the requested quantity down.
    pub fn was_clamped(&self) -> bool {
        self.applied < self.requested
    }

    pub fn removed(&self) -> bool {
        self.applied == 0
    }
}

// =============================================================================
// Cart Session
// =============================================================================

/// Mutable state of one checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSession<L> {
    items: Vec<L>,
    discount: DiscountSpec,
    tax_rate: TaxRate,
}

impl<L> Default for CartSession<L> {
    fn default() -> Self {
        CartSession {
            items: Vec::new(),
            discount: DiscountSpec::NONE,
            tax_rate: TaxRate::zero(),
        }
    }
}

impl<L: CartLine> CartSession<L> {
    /// Empty cart, no discount, zero tax.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty cart with the operator's tax rate already set.
    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        CartSession {
            tax_rate,
            ..Self::default()
        }
    }

    /// Lines in the order they were first added.
    pub fn items(&self) -> &[L] {
        &self.items
    }

    pub fn line(&self, key: &L::Key) -> Option<&L> {
        self.items.iter().find(|line| line.matches(key))
    }

    /// Quantity of the line under `key`, 0 if absent.
    pub fn item_qty(&self, key: &L::Key) -> i64 {
        self.line(key).map_or(0, CartLine::qty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across lines.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |sum, line| sum.saturating_add(line.qty()))
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartLine::total).sum()
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, &self.discount, self.tax_rate)
    }

    pub fn discount(&self) -> DiscountSpec {
        self.discount
    }

    /// Replaces the discount. Not validated: a negative amount is a surcharge.
    pub fn set_discount(&mut self, discount: DiscountSpec) {
        self.discount = discount;
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Replaces the tax rate. Not validated.
    pub fn set_tax_rate(&mut self, tax_rate: TaxRate) {
        self.tax_rate = tax_rate;
    }

    /// Sets a line's quantity. `qty <= 0` removes the line; a ceiling clamps it.
    pub fn update_qty(&mut self, key: &L::Key, qty: i64) -> Option<QtyAdjustment> {
        let index = self.position(key)?;
        Some(self.apply_qty(index, qty))
    }

    /// Adds one, up to the line's ceiling.
    pub fn increment_qty(&mut self, key: &L::Key) -> Option<QtyAdjustment> {
        let index = self.position(key)?;
        let requested = self.items[index].qty().saturating_add(1);
        Some(self.apply_qty(index, requested))
    }

    /// Takes one away; a line at quantity 1 is removed instead.
    pub fn decrement_qty(&mut self, key: &L::Key) -> Option<QtyAdjustment> {
        let index = self.position(key)?;
        let requested = self.items[index].qty().saturating_sub(1);
        Some(self.apply_qty(index, requested))
    }

    /// Drops the line under `key`. Returns whether anything was removed;
    /// removing an absent key is a harmless no-op.
    pub fn remove_item(&mut self, key: &L::Key) -> bool {
        let before = self.items.len();
        self.items.retain(|line| !line.matches(key));
        self.items.len() != before
    }

    /// Empties the cart and resets the discount. The tax rate is kept.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.discount = DiscountSpec::NONE;
    }

    fn position(&self, key: &L::Key) -> Option<usize> {
        self.items.iter().position(|line| line.matches(key))
    }

    /// The single place quantities are written, so `0 < qty <= ceiling`
    /// holds for every stored line.
    fn apply_qty(&mut self, index: usize, requested: i64) -> QtyAdjustment {
        let applied = match self.items[index].ceiling() {
            Some(ceiling) => requested.min(ceiling),
            None => requested,
        };

        if applied <= 0 {
            self.items.remove(index);
            return QtyAdjustment {
                requested,
                applied: 0,
            };
        }

        self.items[index].set_qty(applied);
        QtyAdjustment { requested, applied }
    }
}

// =============================================================================
// Plain Cart
// =============================================================================

impl CartSession<LineItem> {
    /// Adds one unit of `product`, merging with an existing line.
    /// There is no upper bound on a plain line's quantity.
    pub fn add_item(&mut self, product: &Product) -> QtyAdjustment {
        match self.position(product.id.as_str()) {
            Some(index) => {
                let requested = self.items[index].qty().saturating_add(1);
                self.apply_qty(index, requested)
            }
            None => {
                self.items.push(LineItem::from_product(product, 1));
                QtyAdjustment::exact(1)
            }
        }
    }
}

// =============================================================================
// Batch Cart
// =============================================================================

impl CartSession<BatchLineItem> {
    /// Adds `batch.qty` units of `product` from one lot.
    ///
    /// ## Clamping
    /// ```text
    /// existing line:  qty = min(existing + batch.qty, batch.max_qty)
    /// new line:       qty = min(batch.qty, batch.max_qty)
    /// ```
    /// The line's ceiling is refreshed to `batch.max_qty`, the freshest stock
    /// figure. A new line that would start at zero or less is not inserted.
    pub fn add_item_with_batch(&mut self, product: &Product, batch: &BatchInfo) -> QtyAdjustment {
        let existing = self.items.iter().position(|line| {
            line.line.product_id == product.id && line.batch_id == batch.batch_id
        });

        match existing {
            Some(index) => {
                self.items[index].max_qty = batch.max_qty;
                let requested = self.items[index].qty().saturating_add(batch.qty);
                self.apply_qty(index, requested)
            }
            None => {
                let applied = batch.qty.min(batch.max_qty);
                if applied > 0 {
                    self.items
                        .push(BatchLineItem::from_batch(product, batch, applied));
                }
                QtyAdjustment {
                    requested: batch.qty,
                    applied: applied.max(0),
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
