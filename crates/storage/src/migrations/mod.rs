#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod v1;

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 1;

/// Brings the schema up to [`SCHEMA_VERSION`]. Safe to run on every startup.
pub(crate) fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: issues and feedback tables");
        conn.execute_batch(v1::SQL)?;
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
