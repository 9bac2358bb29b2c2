//! # Receipt Rendering
//!
//! Turns a stored [`Bill`] into a self-contained HTML document for printing
//! or download. Rendering is pure: the same bill and shop info always produce
//! the same bytes, which is what the print/export side relies on.
//!
//! ## Document Layout
//! ```text
//! ┌──────────────────────────────┐
//! │        SHOP NAME             │  header (address, phone optional)
//! │  Bill No: INV-0042           │
//! │  Date: 19/10/2026, 3:05:09 pm│
//! │  Customer: A. Rao            │  optional
//! ├──────────────────────────────┤
//! │  Item          Qty   Amount  │
//! │  Paracetamol     2   ₹25.00  │
//! ├──────────────────────────────┤
//! │  Subtotal            ₹25.00  │
//! │  Discount             ₹2.50  │  only when > 0, same value as the bill
//! │  Tax                  ₹1.13  │  only when > 0
//! │  TOTAL               ₹23.63  │
//! ├──────────────────────────────┤
//! │  Payment Mode          CASH  │
//! │  Amount Received     ₹50.00  │  cash with amount received only
//! │  Change              ₹26.37  │
//! │  Thank you for your visit!   │
//! └──────────────────────────────┘
//! ```

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::bill::Bill;
use crate::money::Money;
use crate::types::{PaymentMode, ShopInfo};

pub const DEFAULT_SHOP_NAME: &str = "Medical Store";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const FOOTER_TEXT: &str = "Thank you for your visit!";

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %-I:%M:%S %P";

const STYLE: &str = "body { font-family: 'Courier New', monospace; margin: 0; padding: 12px; color: #000; }
.receipt { max-width: 300px; margin: 0 auto; }
.header, .footer { text-align: center; }
.header h2 { margin: 0 0 4px 0; }
.header p, .meta p, .footer p { margin: 2px 0; font-size: 12px; }
table.items { width: 100%; border-collapse: collapse; margin: 8px 0; font-size: 12px; }
table.items th, table.items td { padding: 2px 0; text-align: left; }
table.items th:nth-child(n+2), table.items td:nth-child(n+2) { text-align: right; }
.totals, .payment { border-top: 1px dashed #000; padding-top: 6px; font-size: 12px; }
.row { display: flex; justify-content: space-between; }
.row.total { font-size: 14px; margin-top: 4px; }
.footer { border-top: 1px dashed #000; margin-top: 8px; padding-top: 6px; }";

/// File name used when the receipt is offered as a download.
pub fn receipt_file_name(bill: &Bill) -> String {
    let number: String = bill
        .display_number()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("receipt_{number}.html")
}

/// Renders `bill` as a printable HTML document.
///
/// Never fails: missing shop fields, customer name and payment details fall
/// back to defaults or are left out.
pub fn render_receipt(bill: &Bill, shop: &ShopInfo) -> String {
    let symbol = non_blank(&shop.currency_symbol).unwrap_or(DEFAULT_CURRENCY_SYMBOL);
    let amount = |value: Money| esc(&value.format_with(symbol));
    let number = bill.display_number();

    let mut body = String::new();

    // Header
    body.push_str("<div class=\"header\">\n");
    body.push_str(&format!(
        "<h2>{}</h2>\n",
        esc(non_blank(&shop.name).unwrap_or(DEFAULT_SHOP_NAME))
    ));
    if let Some(address) = non_blank(&shop.address) {
        body.push_str(&format!("<p>{}</p>\n", esc(address)));
    }
    if let Some(phone) = non_blank(&shop.phone) {
        body.push_str(&format!("<p>Phone: {}</p>\n", esc(phone)));
    }
    body.push_str("</div>\n");

    // Bill meta
    body.push_str("<div class=\"meta\">\n");
    body.push_str(&format!("<p>Bill No: {}</p>\n", esc(number)));
    body.push_str(&format!(
        "<p>Date: {}</p>\n",
        format_timestamp(bill.created_at, shop.utc_offset_minutes)
    ));
    if let Some(customer) = non_blank(&bill.customer_name) {
        body.push_str(&format!("<p>Customer: {}</p>\n", esc(customer)));
    }
    body.push_str("</div>\n");

    // Items
    body.push_str("<table class=\"items\">\n");
    body.push_str("<thead><tr><th>Item</th><th>Qty</th><th>Amount</th></tr></thead>\n");
    body.push_str("<tbody>\n");
    for item in &bill.items {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            esc(&item.name),
            item.qty,
            amount(item.total)
        ));
    }
    body.push_str("</tbody>\n");
    body.push_str("</table>\n");

    // Totals
    body.push_str("<div class=\"totals\">\n");
    body.push_str(&row("Subtotal", &amount(bill.subtotal)));
    if bill.discount.is_positive() {
        body.push_str(&row("Discount", &amount(bill.discount)));
    }
    if bill.tax.is_positive() {
        body.push_str(&row("Tax", &amount(bill.tax)));
    }
    body.push_str(&format!(
        "<div class=\"row total\"><strong>TOTAL</strong><strong>{}</strong></div>\n",
        amount(bill.total)
    ));
    body.push_str("</div>\n");

    // Payment
    body.push_str("<div class=\"payment\">\n");
    body.push_str(&row("Payment Mode", bill.payment_mode.label()));
    if let (PaymentMode::Cash, Some(received)) = (bill.payment_mode, bill.amount_received) {
        let change = bill.change.unwrap_or(received - bill.total);
        body.push_str(&row("Amount Received", &amount(received)));
        body.push_str(&row("Change", &amount(change)));
    }
    body.push_str("</div>\n");

    body.push_str(&format!(
        "<div class=\"footer\"><p>{}</p></div>\n",
        FOOTER_TEXT
    ));

    html_shell(&format!("Receipt {number}"), &body)
}

fn html_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\"/>\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n<div class=\"receipt\">\n{}</div>\n</body>\n</html>\n",
        esc(title),
        STYLE,
        body
    )
}

fn row(label: &str, value: &str) -> String {
    format!("<div class=\"row\"><span>{label}</span><span>{value}</span></div>\n")
}

fn format_timestamp(at: DateTime<Utc>, utc_offset_minutes: Option<i32>) -> String {
    let offset = utc_offset_minutes
        .and_then(|minutes| FixedOffset::east_opt(minutes.saturating_mul(60)))
        .unwrap_or_else(|| Utc.fix());
    at.with_timezone(&offset).format(TIMESTAMP_FORMAT).to_string()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn esc(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// =============================================================================
// Unit Tests
// =============================================================================
