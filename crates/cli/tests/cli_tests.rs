use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("civic-report").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Civic issue reporting server"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("civic-report").unwrap();
    cmd.arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("port"))
        .stdout(predicate::str::contains("uploads-dir"));
}

#[test]
fn test_cli_migrate_creates_database() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("data").join("issues.db");

    let mut cmd = Command::cargo_bin("civic-report").unwrap();
    cmd.arg("--db")
        .arg(&db_path)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("schema version 1"));
    assert!(db_path.exists());

    // Second run is a no-op on the existing file.
    let mut again = Command::cargo_bin("civic-report").unwrap();
    again.arg("--db").arg(&db_path).arg("migrate").assert().success();
}

#[test]
fn test_rust_log_overrides_default_level() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("issues.db");

    let mut default_level = Command::cargo_bin("civic-report").unwrap();
    default_level
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(&db_path)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database schema up to date"));

    let mut quiet = Command::cargo_bin("civic-report").unwrap();
    quiet
        .env("RUST_LOG", "warn")
        .arg("--db")
        .arg(&db_path)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database schema up to date").not())
        .stdout(predicate::str::contains("schema version 1"));
}
