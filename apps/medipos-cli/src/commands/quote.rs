//! # Quote Command
//!
//! Replays a ticket and reports what the tender screen would show.

use std::path::Path;

use medipos_core::Totals;
use serde::Serialize;
use tracing::info;

use crate::config::ConfigState;
use crate::error::CliResult;
use crate::ticket::{replay, ReplayedCart, Ticket};

/// Cart summary printed by `medipos quote`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub line_count: usize,
    pub total_quantity: i64,
    pub totals: Totals,
}

impl From<&ReplayedCart> for QuoteResponse {
    fn from(cart: &ReplayedCart) -> Self {
        let total_quantity = match cart {
            ReplayedCart::Plain(cart) => cart.total_quantity(),
            ReplayedCart::Batch(cart) => cart.total_quantity(),
        };
        QuoteResponse {
            line_count: cart.line_count(),
            total_quantity,
            totals: cart.totals(),
        }
    }
}

pub fn quote(config: &ConfigState, ticket_path: &Path) -> CliResult<QuoteResponse> {
    let ticket = Ticket::load(ticket_path)?;
    let cart = replay(&ticket, config.default_tax_rate)?;
    let response = QuoteResponse::from(&cart);

    info!(
        ticket = %ticket_path.display(),
        lines = response.line_count,
        total = %response.totals.total,
        "Quote computed"
    );
    Ok(response)
}
