//! Typed error enum for the service layer.

use civic_report_storage::StorageError;
use thiserror::Error;

/// Service-layer error. Notification failures never appear here.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (disk, lock, constraint).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}
