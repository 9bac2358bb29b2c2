//! # Receipt Command
//!
//! Renders a stored bill into a printable HTML receipt.

use std::fs;
use std::path::{Path, PathBuf};

use medipos_core::{receipt_file_name, render_receipt, Bill};
use tracing::{debug, info};

use crate::config::ConfigState;
use crate::error::{CliError, CliResult};

pub fn load_bill(path: &Path) -> CliResult<Bill> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| CliError::json(path, e))
}

/// Renders the bill at `bill_path` without touching the filesystem further.
pub fn render(config: &ConfigState, bill_path: &Path) -> CliResult<String> {
    let bill = load_bill(bill_path)?;
    debug!(bill = bill.display_number(), "Rendering receipt");
    Ok(render_receipt(&bill, &config.shop))
}

/// Renders the bill and writes it into the configured receipt directory.
///
/// Returns the path written.
pub fn write_receipt(config: &ConfigState, bill_path: &Path) -> CliResult<PathBuf> {
    let bill = load_bill(bill_path)?;
    let html = render_receipt(&bill, &config.shop);

    let dir = &config.receipt_dir;
    fs::create_dir_all(dir).map_err(|e| CliError::io(dir, e))?;
    let path = dir.join(receipt_file_name(&bill));
    fs::write(&path, html).map_err(|e| CliError::io(&path, e))?;

    info!(bill = bill.display_number(), path = %path.display(), "Receipt written");
    Ok(path)
}
