//! Async trait implementations for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use civic_report_core::{NewFeedback, NewIssue};

use crate::error::StorageError;
use crate::traits::ReportStore;
use crate::Storage;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Blocking(format!("spawn_blocking join error: {e}")))?
}

/// Clones the handle and the borrowed input, then runs the sync method on the blocking pool.
macro_rules! delegate {
    ($self:ident, $method:ident, $arg:ident) => {{
        let s = $self.clone();
        let $arg = $arg.clone();
        blocking(move || s.$method(&$arg)).await
    }};
}

#[async_trait]
impl ReportStore for Storage {
    async fn insert_issue(&self, issue: &NewIssue) -> Result<i64, StorageError> {
        delegate!(self, insert_issue, issue)
    }
    async fn insert_feedback(&self, feedback: &NewFeedback) -> Result<i64, StorageError> {
        delegate!(self, insert_feedback, feedback)
    }
}
