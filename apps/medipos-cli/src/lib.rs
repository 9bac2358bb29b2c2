//! # MediPOS Till CLI
//!
//! Command-line front end over `medipos-core`.
//!
//! ## Module Organization
//! ```text
//! medipos_cli/
//! ├── lib.rs          ◄─── You are here (tracing setup & exports)
//! ├── config.rs       ◄─── Environment configuration
//! ├── ticket.rs       ◄─── Ticket format & cart replay
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── quote.rs    ◄─── Totals for a ticket
//! │   ├── checkout.rs ◄─── Ticket → Bill
//! │   └── receipt.rs  ◄─── Bill → HTML receipt
//! └── error.rs        ◄─── CLI error type
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod ticket;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,medipos=debug";

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so stdout stays clean for JSON and HTML output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show all debug logs
/// - `RUST_LOG=medipos_core=trace` - Trace-level for the core crate
/// - Default: INFO for everything, DEBUG for medipos crates
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
