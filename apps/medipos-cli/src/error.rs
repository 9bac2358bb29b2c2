//! # CLI Error Type
//!
//! Everything that can go wrong around the core: reading files, parsing JSON,
//! and the few core operations that can fail (checkout). Configuration is
//! loaded once in `main` and reports its own [`ConfigError`].
//!
//! ```text
//! ValidationError ──► ConfigError ─────────────┐
//! CoreError ──────────┐                        ├──► anyhow (main)
//! io::Error ──────────┼──► CliError ───────────┘
//! serde_json::Error ──┘
//! ```

use std::path::PathBuf;

use medipos_core::{CoreError, ValidationError};
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid {key}: {source}")]
    Invalid {
        key: String,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A ticket mixes lines with and without a batch.
    #[error("Ticket line {index} has no batch, but other lines do")]
    MixedTicket { index: usize },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        CliError::Json {
            path: path.into(),
            source,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
