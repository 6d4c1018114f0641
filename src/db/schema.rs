//! SQL DDL for initializing contact storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `name`, `email`, `message` as required text
/// - `timestamp` TEXT, RFC3339 with fixed-width fractional seconds so
///   lexicographic ORDER BY matches chronological order
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    message TEXT NOT NULL,
    timestamp TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_contacts_timestamp ON contacts(timestamp);
"#;
