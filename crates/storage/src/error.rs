//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / constraint / disk failure reported by SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Schema creation failed at startup.
    #[error("migration error: {0}")]
    Migration(#[source] rusqlite::Error),

    /// Database directory could not be prepared.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking task running the query panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Blocking(String),
}
