//! Error types for the relay core.
//!
//! [`RelayError`] is what handlers and [`crate::Bot`] implementations return.

use thiserror::Error;

/// Top-level error for the relay.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The transport refused or failed to deliver a message.
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
