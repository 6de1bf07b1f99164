//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer model
//!
//! Only contract violations and ambient I/O surface here. A copy that breaks
//! a channel rule is not an error: it is a [`crate::ValidationVerdict`] with
//! `is_valid == false`.

use thiserror::Error;

/// @acp:summary "Errors raised by the adcopy library"
#[derive(Debug, Error)]
pub enum AdCopyError {
    /// Caller passed a field kind outside title/description/main/sub/full
    #[error("Unknown field kind: {0}")]
    UnknownFieldKind(String),

    /// Caller passed a channel with no rule table
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    /// Prompt store has no instruction document for the channel
    #[error("No prompt found for channel: {0}")]
    MissingPrompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdCopyError>;
