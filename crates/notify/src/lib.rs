//! Developer notifications for civic-report
//!
//! A [`Notifier`] delivers one advisory email per accepted submission.
//! Callers treat delivery as best-effort: failures are logged, never surfaced.

mod config;
mod disabled;
mod error;
mod message;
mod smtp;

use async_trait::async_trait;

pub use config::MailConfig;
pub use disabled::DisabledNotifier;
pub use error::NotifyError;
pub use message::Notification;
pub use smtp::{Recipients, SmtpNotifier};

/// Outbound notification channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a single message to the configured developer recipients.
    async fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError>;
}
