use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Faults a handler cannot recover locally.
///
/// Validation failures, bad credentials, and insert errors never reach this
/// type: they are flashed back to the user at the call site. What remains is
/// infrastructure breakage, which renders as a plain 500 page.
#[derive(Debug, ThisError)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    CsvBuffer(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>500</h1><p>An internal server error occurred.</p>"),
        )
            .into_response()
    }
}
