//! # Totals
//!
//! Derives the running totals of a cart from its lines, discount and tax.
//!
//! ```text
//! subtotal        = Σ line.total
//! discount        = percent ? subtotal × bps / 10000 : fixed amount
//! after_discount  = subtotal − discount          (may go negative)
//! tax             = after_discount × tax_bps / 10000
//! total           = max(0, after_discount + tax)
//! item_count      = Σ line.qty
//! ```
//!
//! Nothing here is stored. Hosts call it on every render; it is O(lines).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::line::CartLine;
use crate::money::Money;
use crate::types::{DiscountSpec, TaxRate};

/// Snapshot of a cart's money, derived on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    /// Never negative.
    pub total: Money,
    /// Sum of quantities, not number of lines.
    pub item_count: i64,
}

/// Computes totals for any set of cart lines.
///
/// Discount and tax may be negative or exceed the subtotal; they flow through
/// unchanged and only `total` is floored at zero.
pub fn compute_totals<'a, L, I>(items: I, discount: &DiscountSpec, tax_rate: TaxRate) -> Totals
where
    L: CartLine + 'a,
    I: IntoIterator<Item = &'a L>,
{
    let (subtotal, item_count) = items
        .into_iter()
        .fold((Money::zero(), 0_i64), |(sum, count), line| {
            (sum + line.total(), count.saturating_add(line.qty()))
        });

    let discount_amount = discount.amount_for(subtotal);
    let after_discount = subtotal - discount_amount;
    let tax = tax_rate.apply(after_discount);

    Totals {
        subtotal,
        discount: discount_amount,
        tax,
        total: (after_discount + tax).floor_zero(),
        item_count,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineItem;
    use crate::types::Product;

    fn line(price_cents: i64, qty: i64) -> LineItem {
        let product = Product::new(format!("p{price_cents}"), "Item", Money::from_cents(price_cents));
        let mut line = LineItem::from_product(&product, 1);
        line.set_qty(qty);
        line
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let totals = compute_totals::<LineItem, _>(&[], &DiscountSpec::NONE, TaxRate::zero());
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_subtotal_and_item_count() {
        let items = vec![line(1000, 2), line(250, 3)];
        let totals = compute_totals(&items, &DiscountSpec::NONE, TaxRate::zero());

        assert_eq!(totals.subtotal.cents(), 2750);
        assert_eq!(totals.item_count, 5);
        assert_eq!(totals.total.cents(), 2750);
    }

    #[test]
    fn test_percent_discount() {
        let items = vec![line(10000, 1)];
        let totals = compute_totals(&items, &DiscountSpec::percent(10), TaxRate::zero());

        assert_eq!(totals.discount.cents(), 1000);
        assert_eq!(totals.total.cents(), 9000);
    }

    #[test]
    fn test_tax_on_subtotal() {
        let items = vec![line(10000, 1)];
        let totals = compute_totals(&items, &DiscountSpec::NONE, TaxRate::from_bps(1000));

        assert_eq!(totals.tax.cents(), 1000);
        assert_eq!(totals.total.cents(), 11000);
    }

    #[test]
    fn test_tax_applies_after_discount() {
        let items = vec![line(10000, 1)];
        let totals = compute_totals(
            &items,
            &DiscountSpec::fixed(Money::from_cents(2000)),
            TaxRate::from_bps(1000),
        );

        assert_eq!(totals.tax.cents(), 800);
        assert_eq!(totals.total.cents(), 8800);
    }

    #[test]
    fn test_discount_exceeding_subtotal_floors_total_only() {
        let items = vec![line(1000, 1)];
        let totals = compute_totals(
            &items,
            &DiscountSpec::fixed(Money::from_cents(1500)),
            TaxRate::from_bps(1000),
        );

        assert_eq!(totals.discount.cents(), 1500);
        // tax on -5.00 is -0.50, left as is
        assert_eq!(totals.tax.cents(), -50);
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_negative_discount_acts_as_surcharge() {
        let items = vec![line(1000, 1)];
        let totals = compute_totals(
            &items,
            &DiscountSpec::fixed(Money::from_cents(-200)),
            TaxRate::zero(),
        );

        assert_eq!(totals.total.cents(), 1200);
    }

    #[test]
    fn test_percent_discount_rounds_to_nearest_minor_unit() {
        // 3 × 3.33 = 9.99; 15% = 1.4985 -> 1.50
        let items = vec![line(333, 3)];
        let totals = compute_totals(&items, &DiscountSpec::percent(15), TaxRate::zero());

        assert_eq!(totals.discount.cents(), 150);
        assert_eq!(totals.total.cents(), 849);
    }
}
