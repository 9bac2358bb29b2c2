//! # medipos-core: Billing Core for MediPOS
//!
//! Cart accumulation, batch stock ceilings, discount and tax totals, bill
//! assembly and receipt rendering, as pure functions and plain values with
//! zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         MediPOS Architecture                            │
//! │                                                                         │
//! │  Catalog / Inventory ──► Product, BatchInfo                             │
//! │                               │                                         │
//! │  ┌────────────────────────────▼────────────────────────────────────┐   │
//! │  │               ★ medipos-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   cart    │  │  totals   │  │   bill    │  │  receipt  │   │   │
//! │  │   │ Cart      │─►│ subtotal  │─►│ checkout  │─►│  HTML     │   │   │
//! │  │   │ BatchCart │  │ disc, tax │  │ Bill      │  │ document  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NEVER PANICS ON INPUT     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                               │                                         │
//! │  Bill store / Printer  ◄──────┘                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money in integer minor units, basis-point scaling
//! - [`types`] - Product, BatchInfo, TaxRate, DiscountSpec, ShopInfo
//! - [`line`] - Plain and batch cart lines
//! - [`cart`] - Generic cart session (`Cart`, `BatchCart`)
//! - [`totals`] - Totals calculation
//! - [`bill`] - Bill assembly at checkout
//! - [`receipt`] - Receipt rendering
//! - [`validation`] - Configuration validators
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use medipos_core::{Cart, DiscountSpec, Money, Product, TaxRate};
//!
//! let mut cart = Cart::with_tax_rate(TaxRate::from_bps(1000)); // 10%
//! let syrup = Product::new("p1", "Cough Syrup", Money::from_cents(10000));
//!
//! cart.add_item(&syrup);
//! cart.set_discount(DiscountSpec::percent(10));
//!
//! let totals = cart.totals();
//! assert_eq!(totals.discount.cents(), 1000); // 10.00 off
//! assert_eq!(totals.tax.cents(), 900);       // 10% of 90.00
//! assert_eq!(totals.total.cents(), 9900);
//! ```

pub mod bill;
pub mod cart;
pub mod error;
pub mod line;
pub mod money;
pub mod receipt;
pub mod totals;
pub mod types;
pub mod validation;

pub use bill::{Bill, BillItem, CheckoutDetails};
pub use cart::{BatchCart, Cart, CartSession, QtyAdjustment};
pub use error::{CoreError, CoreResult, ParseMoneyError, ValidationError};
pub use line::{BatchKey, BatchLineItem, CartLine, LineItem};
pub use money::Money;
pub use receipt::{receipt_file_name, render_receipt};
pub use totals::{compute_totals, Totals};
pub use types::*;
