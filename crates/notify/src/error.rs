//! Typed error enum for the notify crate.

use thiserror::Error;

/// Errors from composing or delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

impl NotifyError {
    /// Whether retrying the same message could succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_transient() || e.is_timeout(),
            _ => false,
        }
    }
}
