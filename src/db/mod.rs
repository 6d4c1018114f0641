//! Database module: model and schema for contact storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the pool-backed storage handle

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::Contact;
pub use schema::SQLITE_INIT;
pub use sqlite::{ContactStorage, SqlitePool};

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;

/// Open (creating if missing) the SQLite database at `path` and return a
/// ready-to-use storage handle with the schema applied. The parent directory
/// is created on first run.
pub async fn spawn(path: &Path) -> Result<ContactStorage, AppError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(sqlx::Error::Io)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    let storage = ContactStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}
