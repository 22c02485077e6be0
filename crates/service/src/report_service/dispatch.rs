use std::sync::Arc;

use civic_report_notify::Notification;

use super::ReportService;

impl ReportService {
    /// Fire-and-forget: the spawned task owns its failure and logs it.
    pub(crate) fn dispatch(&self, notification: Notification) {
        let notifier = Arc::clone(&self.notifier);
        drop(tokio::spawn(async move {
            if let Err(e) = notifier.send(&notification.subject, &notification.body).await {
                tracing::warn!(
                    error = %e,
                    transient = e.is_transient(),
                    subject = %notification.subject,
                    "Notification failed; submission is stored regardless"
                );
            }
        }));
    }
}
