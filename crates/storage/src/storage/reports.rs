use civic_report_core::{NewFeedback, NewIssue};
use rusqlite::params;

use super::{get_conn, Storage};
use crate::error::StorageError;

impl Storage {
    /// Insert an issue row.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn insert_issue(&self, issue: &NewIssue) -> Result<i64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let id: i64 = conn.query_row(
            "INSERT INTO issues (location, description, image) VALUES (?1, ?2, ?3) RETURNING id",
            params![issue.location, issue.description, issue.image],
            |row| row.get(0),
        )?;
        tracing::debug!(id, "Inserted issue");
        Ok(id)
    }

    /// Insert a feedback row.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn insert_feedback(&self, feedback: &NewFeedback) -> Result<i64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let id: i64 = conn.query_row(
            "INSERT INTO feedback (rating, comments) VALUES (?1, ?2) RETURNING id",
            params![feedback.rating, feedback.comments],
            |row| row.get(0),
        )?;
        tracing::debug!(id, "Inserted feedback");
        Ok(id)
    }
}
