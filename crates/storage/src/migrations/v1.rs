//! Migration v1: issues and feedback tables

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS issues (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    location TEXT NOT NULL,
    description TEXT NOT NULL,
    image TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS feedback (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    rating INTEGER NOT NULL,
    comments TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";
