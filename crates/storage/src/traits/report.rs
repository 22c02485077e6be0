use async_trait::async_trait;
use civic_report_core::{NewFeedback, NewIssue};

use crate::error::StorageError;

/// Create-only persistence for submissions.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Insert an issue and return its newly assigned id.
    async fn insert_issue(&self, issue: &NewIssue) -> Result<i64, StorageError>;

    /// Insert feedback and return its newly assigned id.
    async fn insert_feedback(&self, feedback: &NewFeedback) -> Result<i64, StorageError>;
}
