//! Storage layer for civic-report
//!
//! One SQLite file behind an r2d2 pool holding the `issues` and `feedback`
//! tables. Rows are only ever inserted.

mod error;
mod migrations;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;
pub use storage::Storage;
pub use traits::ReportStore;
