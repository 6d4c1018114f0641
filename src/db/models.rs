use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A submitted contact message. Rows are append-only: created once through
/// the public form, never updated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
