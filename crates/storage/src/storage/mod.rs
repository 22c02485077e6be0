//! `SQLite` storage implementation.
//!
//! All methods are synchronous; the async facade lives in `sqlite_async`.

mod reports;

use civic_report_core::constants::DEFAULT_DB_POOL_SIZE;
use civic_report_core::env_config::env_parse_with_default;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Process-wide storage handle wrapping the `SQLite` connection pool.
///
/// Created once at startup and shared through the application state;
/// cloning is cheap and shares the pool.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Per-connection concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 5000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

impl Storage {
    /// Opens (or creates) the database file and ensures both tables exist.
    ///
    /// # Errors
    /// Returns error if the directory, pool or schema cannot be set up.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = env_parse_with_default("DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE).max(1);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = get_conn(&pool)?;
        migrations::run_migrations(&conn).map_err(StorageError::Migration)?;
        drop(conn);

        tracing::info!(
            path = %db_path.display(),
            pool_size = pool_size,
            "Storage initialized with connection pool"
        );

        Ok(Self { pool })
    }

    /// Flushes the write-ahead log into the main database file.
    ///
    /// Called once on graceful shutdown; the pool itself closes on drop.
    ///
    /// # Errors
    /// Returns error if no connection is available or the checkpoint fails.
    pub fn close(&self) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_| Ok(()))?;
        tracing::info!("Storage checkpointed and closing");
        Ok(())
    }
}
