//! End-to-end flow through the public API: scan, adjust, check out, print.

use chrono::NaiveDate;
use medipos_core::{
    receipt_file_name, render_receipt, BatchCart, BatchInfo, BatchKey, Cart, CheckoutDetails,
    DiscountSpec, Money, PaymentMode, Product, ShopInfo, TaxRate,
};

fn shop() -> ShopInfo {
    ShopInfo {
        name: Some("Lakeside Clinic Pharmacy".to_string()),
        address: Some("4 Lake View, Bhopal".to_string()),
        phone: None,
        currency_symbol: None,
        utc_offset_minutes: Some(330),
    }
}

#[test]
fn test_plain_cart_checkout_and_receipt() {
    let mut cart = Cart::with_tax_rate(TaxRate::from_bps(500));
    let bandage = Product::new("p-band", "Crepe Bandage", Money::from_cents(8000));
    let gloves = Product::new("p-glove", "Nitrile Gloves", Money::from_cents(2000));

    cart.add_item(&bandage);
    cart.add_item(&gloves);
    cart.add_item(&gloves);
    cart.set_discount(DiscountSpec::fixed(Money::from_cents(2000)));

    // 80 + 40 = 120, -20 = 100, +5% = 105
    let totals = cart.totals();
    assert_eq!(totals.subtotal.cents(), 12000);
    assert_eq!(totals.tax.cents(), 500);
    assert_eq!(totals.total.cents(), 10500);
    assert_eq!(totals.item_count, 3);

    let bill = cart
        .checkout(CheckoutDetails {
            bill_number: Some("LCP-1001".to_string()),
            customer_name: Some("Meera Iyer".to_string()),
            payment_mode: PaymentMode::Cash,
            amount_received: Some(Money::from_cents(20000)),
        })
        .expect("cash covers the total");
    cart.clear_cart();

    assert!(cart.is_empty());
    assert_eq!(cart.tax_rate(), TaxRate::from_bps(500));

    let html = render_receipt(&bill, &shop());
    assert!(html.contains("<h2>Lakeside Clinic Pharmacy</h2>"));
    assert!(html.contains("<p>Customer: Meera Iyer</p>"));
    assert!(html.contains("<tr><td>Nitrile Gloves</td><td>2</td><td>₹40.00</td></tr>"));
    assert!(html.contains("<span>Discount</span><span>₹20.00</span>"));
    assert!(html.contains("<span>Tax</span><span>₹5.00</span>"));
    assert!(html.contains("<strong>₹105.00</strong>"));
    assert!(html.contains("<span>Change</span><span>₹95.00</span>"));
    assert_eq!(receipt_file_name(&bill), "receipt_LCP-1001.html");
}

#[test]
fn test_batch_cart_never_oversells_a_lot() {
    let mut cart = BatchCart::new();
    let insulin = Product::new("p-ins", "Insulin Glargine", Money::from_cents(65000));
    let lot = |qty| BatchInfo {
        batch_id: "lot-a".to_string(),
        batch_no: "GLA-0925".to_string(),
        expiry_date: NaiveDate::from_ymd_opt(2027, 9, 30).unwrap(),
        qty,
        max_qty: 4,
    };
    let key = BatchKey::new("p-ins", "lot-a");

    cart.add_item_with_batch(&insulin, &lot(3));
    let second = cart.add_item_with_batch(&insulin, &lot(3));
    assert!(second.was_clamped());
    assert_eq!(second.applied, 4);

    assert!(cart.increment_qty(&key).unwrap().was_clamped());
    assert_eq!(cart.update_qty(&key, 100).unwrap().applied, 4);
    assert_eq!(cart.item_qty(&key), 4);

    let bill = cart
        .checkout(CheckoutDetails {
            payment_mode: PaymentMode::Upi,
            ..Default::default()
        })
        .expect("non-empty cart");

    assert_eq!(bill.total.cents(), 260000);
    assert_eq!(bill.items[0].batch_no.as_deref(), Some("GLA-0925"));

    let html = render_receipt(&bill, &shop());
    assert!(html.contains("<span>UPI</span>"));
    assert!(!html.contains("Amount Received"));
}

#[test]
fn test_bill_round_trips_through_storage_json() {
    let mut cart = Cart::new();
    cart.add_item(&Product::new("p1", "Vitamin D3", Money::from_cents(15000)));
    cart.set_discount(DiscountSpec::percent(10));

    let bill = cart.checkout(CheckoutDetails::default()).expect("non-empty cart");
    let stored = serde_json::to_string(&bill).expect("bill serializes");
    let restored: medipos_core::Bill = serde_json::from_str(&stored).expect("bill deserializes");

    assert_eq!(restored, bill);
    assert_eq!(
        render_receipt(&restored, &shop()),
        render_receipt(&bill, &shop())
    );
}
