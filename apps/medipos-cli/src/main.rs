//! MediPOS till CLI entry point.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use medipos_cli::commands::{checkout, quote, receipt, to_pretty_json};
use medipos_cli::config::ConfigState;
use medipos_cli::init_tracing;
use medipos_core::{CheckoutDetails, Money, PaymentMode};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "medipos", about = "MediPOS till tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print cart totals for a ticket
    Quote {
        /// Ticket JSON file
        ticket: PathBuf,
    },
    /// Finalize a ticket into a bill and print it as JSON
    Checkout(CheckoutArgs),
    /// Render a bill JSON file into an HTML receipt
    Receipt {
        /// Bill JSON file
        bill: PathBuf,
        /// Print the HTML instead of writing it to the receipt directory
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    /// Ticket JSON file
    ticket: PathBuf,
    /// Payment mode: cash, card, upi or online
    #[arg(long, default_value = "cash")]
    mode: PaymentMode,
    /// Cash handed over, e.g. 500 or 499.50
    #[arg(long)]
    received: Option<Money>,
    /// Bill number from the billing sequence
    #[arg(long)]
    bill_number: Option<String>,
    /// Customer name printed on the receipt
    #[arg(long)]
    customer: Option<String>,
}

impl From<CheckoutArgs> for CheckoutDetails {
    fn from(args: CheckoutArgs) -> Self {
        CheckoutDetails {
            bill_number: args.bill_number,
            customer_name: args.customer,
            payment_mode: args.mode,
            amount_received: args.received,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ConfigState::from_env().context("Failed to load configuration")?;
    debug!(
        shop = config.shop.name.as_deref().unwrap_or("-"),
        tax_bps = config.default_tax_rate.bps(),
        receipt_dir = %config.receipt_dir.display(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Quote { ticket } => {
            let response = quote::quote(&config, &ticket)?;
            println!("{}", to_pretty_json(&response)?);
        }
        Commands::Checkout(args) => {
            let ticket = args.ticket.clone();
            let bill = checkout::checkout(&config, &ticket, args.into())?;
            println!("{}", to_pretty_json(&bill)?);
        }
        Commands::Receipt { bill, stdout: true } => {
            print!("{}", receipt::render(&config, &bill)?);
        }
        Commands::Receipt { bill, stdout: false } => {
            let path = receipt::write_receipt(&config, &bill)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
