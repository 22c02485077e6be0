#![expect(clippy::unwrap_used, reason = "test code")]

use crate::{Storage, StorageError, SCHEMA_VERSION};

use super::{create_test_issue, create_test_storage};

#[test]
fn test_storage_new_sets_schema_version() {
    let (storage, _temp_dir) = create_test_storage();
    let conn = storage.pool.get().unwrap();
    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0)).unwrap();
    assert_eq!(version, SCHEMA_VERSION);
}

#[test]
fn test_schema_has_only_the_two_tables() {
    let (storage, _temp_dir) = create_test_storage();
    let conn = storage.pool.get().unwrap();
    let mut stmt = conn
        .prepare("SELECT type, name FROM sqlite_master WHERE name NOT LIKE 'sqlite_%' ORDER BY name")
        .unwrap();
    let objects: Vec<(String, String)> =
        stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?))).unwrap().map(Result::unwrap).collect();
    assert_eq!(
        objects,
        vec![("table".to_owned(), "feedback".to_owned()), ("table".to_owned(), "issues".to_owned())]
    );
}

#[test]
fn test_reopen_is_idempotent_and_keeps_rows() {
    let (storage, temp_dir) = create_test_storage();
    let id = storage.insert_issue(&create_test_issue("Old Town")).unwrap();
    storage.close().unwrap();
    drop(storage);

    let reopened = Storage::new(&temp_dir.path().join("test.db")).unwrap();
    let next = reopened.insert_issue(&create_test_issue("New Town")).unwrap();
    assert_eq!(next, id + 1);
}

#[test]
fn test_new_creates_missing_parent_directory() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("data").join("issues.db");
    let storage = Storage::new(&db_path).unwrap();
    storage.insert_issue(&create_test_issue("Nested")).unwrap();
    assert!(db_path.exists());
}

#[test]
fn test_missing_table_reports_database_error() {
    let (storage, _temp_dir) = create_test_storage();
    let conn = storage.pool.get().unwrap();
    conn.execute_batch("DROP TABLE feedback;").unwrap();
    drop(conn);

    let err = storage.insert_feedback(&super::create_test_feedback(1)).unwrap_err();
    assert!(matches!(err, StorageError::Database(_)));
}
