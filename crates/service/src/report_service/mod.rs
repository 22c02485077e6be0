mod dispatch;

use std::sync::Arc;

use civic_report_core::{NewFeedback, NewIssue};
use civic_report_notify::{Notification, Notifier};
use civic_report_storage::ReportStore;

use crate::ServiceError;

/// Accepts validated submissions: one insert, then a detached notification.
pub struct ReportService {
    pub(crate) storage: Arc<dyn ReportStore>,
    pub(crate) notifier: Arc<dyn Notifier>,
}

impl ReportService {
    #[must_use]
    pub fn new(storage: Arc<dyn ReportStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { storage, notifier }
    }

    /// Persist an issue and return its id. The developer email is sent in the
    /// background only after the insert succeeded.
    pub async fn submit_issue(&self, issue: NewIssue) -> Result<i64, ServiceError> {
        let id = self.storage.insert_issue(&issue).await?;
        tracing::info!(id, location = %issue.location, has_image = issue.image.is_some(), "Issue reported");
        self.dispatch(Notification::issue_reported(id, &issue));
        Ok(id)
    }

    /// Persist feedback and return its id.
    pub async fn submit_feedback(&self, feedback: NewFeedback) -> Result<i64, ServiceError> {
        let id = self.storage.insert_feedback(&feedback).await?;
        tracing::info!(id, rating = feedback.rating, "Feedback submitted");
        self.dispatch(Notification::feedback_received(id, &feedback));
        Ok(id)
    }
}
