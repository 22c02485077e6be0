//! Create or upgrade the database schema without starting the server.

use std::path::Path;

use civic_report_storage::{Storage, SCHEMA_VERSION};

pub(crate) fn run(db_path: &Path) -> anyhow::Result<()> {
    let storage = Storage::new(db_path)?;
    storage.close()?;
    println!("Database ready at {} (schema version {SCHEMA_VERSION})", db_path.display());
    Ok(())
}
