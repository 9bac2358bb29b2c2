//! # Commands
//!
//! One module per subcommand. Each takes the loaded [`ConfigState`] and its
//! arguments and returns a value; `main` decides how to print it.
//!
//! ```text
//! ticket.json ──► quote    ──► QuoteResponse (JSON)
//! ticket.json ──► checkout ──► Bill (JSON)
//! bill.json   ──► receipt  ──► receipt HTML (file or stdout)
//! ```
//!
//! [`ConfigState`]: crate::config::ConfigState

pub mod checkout;
pub mod quote;
pub mod receipt;

use serde::Serialize;

use crate::error::{CliError, CliResult};

/// Pretty JSON for stdout.
pub fn to_pretty_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::json("<stdout>", e))
}
