//! Shared constants for civic-report.

/// Maximum accepted size of a single uploaded attachment (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Name of the multipart field carrying the report attachment.
pub const UPLOAD_FIELD: &str = "image";

/// Static message served by the reminder endpoint.
pub const REMINDER_MESSAGE: &str = "Community clean-up event this Saturday at 10 AM.";

/// Default HTTP port for `civic-report serve`.
pub const DEFAULT_PORT: u16 = 5000;

/// Default number of pooled SQLite connections.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
