use async_trait::async_trait;

use crate::{Notifier, NotifyError};

/// Used when no mail account is configured. Logs and succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn send(&self, subject: &str, _body: &str) -> Result<(), NotifyError> {
        tracing::debug!(subject, "Mail not configured, skipping notification");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_notifier_always_succeeds() {
        let notifier = DisabledNotifier;
        assert!(notifier.send("subject", "body").await.is_ok());
    }
}
