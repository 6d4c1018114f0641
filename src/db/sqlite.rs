use crate::db::models::Contact;
use crate::db::schema::SQLITE_INIT;
use crate::error::AppError;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct ContactStorage {
    pool: SqlitePool,
}

impl ContactStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new contact, stamping it with the current time.
    /// Returns the assigned row id.
    pub async fn insert(&self, name: &str, email: &str, message: &str) -> Result<i64, AppError> {
        self.insert_at(name, email, message, Utc::now()).await
    }

    /// Insert with an explicit timestamp. Used by tests to build datasets
    /// with known ordering.
    pub async fn insert_at(
        &self,
        name: &str,
        email: &str,
        message: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        // Micros keeps the stored text fixed-width so ORDER BY stays chronological.
        let ts = timestamp.to_rfc3339_opts(SecondsFormat::Micros, true);
        let result = sqlx::query(
            "INSERT INTO contacts (name, email, message, timestamp) VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(email)
        .bind(message)
        .bind(ts)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// All contacts, most recent first. Backs the admin listing.
    pub async fn list_newest_first(&self) -> Result<Vec<Contact>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, email, message, timestamp FROM contacts
             ORDER BY timestamp DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    /// All contacts, oldest first. Backs the CSV export.
    pub async fn list_oldest_first(&self) -> Result<Vec<Contact>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, email, message, timestamp FROM contacts
             ORDER BY timestamp ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    fn row_to_model(row: SqliteRow) -> Result<Contact, AppError> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let email: String = row.try_get("email")?;
        let message: String = row.try_get("message")?;
        let ts_str: String = row.try_get("timestamp")?;

        let timestamp: DateTime<Utc> = chrono::DateTime::parse_from_rfc3339(&ts_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(Contact {
            id,
            name,
            email,
            message,
            timestamp,
        })
    }
}
