//! # Checkout Command
//!
//! Replays a ticket and finalizes it into a bill. The bill is printed as
//! JSON; storing it is up to the caller (pipe it to a file, post it to the
//! back office).

use std::path::Path;

use medipos_core::{Bill, CheckoutDetails};
use tracing::info;

use crate::config::ConfigState;
use crate::error::CliResult;
use crate::ticket::{replay, Ticket};

pub fn checkout(
    config: &ConfigState,
    ticket_path: &Path,
    details: CheckoutDetails,
) -> CliResult<Bill> {
    let ticket = Ticket::load(ticket_path)?;
    let cart = replay(&ticket, config.default_tax_rate)?;
    let bill = cart.checkout(details)?;

    info!(
        bill = bill.display_number(),
        items = bill.items.len(),
        total = %bill.total,
        mode = bill.payment_mode.label(),
        "Bill finalized"
    );
    Ok(bill)
}
