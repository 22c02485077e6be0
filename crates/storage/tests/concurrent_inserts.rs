#![expect(clippy::unwrap_used, reason = "test code")]

use civic_report_core::NewIssue;
use civic_report_storage::{ReportStore, Storage};
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::tempdir;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_issue_inserts_get_unique_ids() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("issues.db");
    let storage = Arc::new(Storage::new(&db_path).unwrap());

    let mut handles = vec![];
    for i in 0..20 {
        let storage = Arc::clone(&storage);
        handles.push(tokio::spawn(async move {
            let issue = NewIssue::new(
                Some(format!("Street {i}")),
                Some("Overflowing bin".to_owned()),
                None,
            )
            .unwrap();
            ReportStore::insert_issue(storage.as_ref(), &issue).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap());
    }
    assert_eq!(ids.len(), 20);

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM issues", [], |row| row.get(0)).unwrap();
    assert_eq!(count, 20);
}
