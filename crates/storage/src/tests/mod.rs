//! Test utilities and module declarations for storage tests.

use crate::Storage;
use civic_report_core::{NewFeedback, NewIssue};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_issue(location: &str) -> NewIssue {
    NewIssue::new(Some(location.to_owned()), Some("Broken streetlight".to_owned()), None).unwrap()
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_feedback(rating: i64) -> NewFeedback {
    NewFeedback::new(Some(rating), Some("great".to_owned())).unwrap()
}

mod schema_tests;
