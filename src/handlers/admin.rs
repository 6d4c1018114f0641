use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::PrivateCookieJar;
use chrono::Utc;
use csv::{QuoteStyle, WriterBuilder};
use minijinja::context;
use serde::Serialize;

use crate::db::models::Contact;
use crate::error::AppError;
use crate::middleware::auth::RequireAdmin;
use crate::middleware::flash;
use crate::router::AppState;
use crate::templates;

#[derive(Serialize)]
struct ContactView {
    name: String,
    email: String,
    message: String,
    timestamp: String,
}

impl From<Contact> for ContactView {
    fn from(c: Contact) -> Self {
        Self {
            name: c.name,
            email: c.email,
            message: c.message,
            timestamp: c.timestamp.format("%d %b %Y, %I:%M %p").to_string(),
        }
    }
}

/// GET /admin -> every stored message, newest first, no pagination.
pub async fn dashboard(
    _gate: RequireAdmin,
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (jar, notice) = flash::take(jar);
    let contacts: Vec<ContactView> = state
        .storage
        .list_newest_first()
        .await?
        .into_iter()
        .map(ContactView::from)
        .collect();
    let page = templates::render("admin.html", context! { flash => notice, contacts })?;
    Ok((jar, page))
}

/// GET /admin/export -> all messages as a CSV attachment, oldest first.
///
/// Every field is quoted, including the header. The export is assembled in
/// memory before sending; the filename carries the export time.
pub async fn export_csv(
    _gate: RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let contacts = state.storage.list_oldest_first().await?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());
    writer.write_record(["ID", "Name", "Email", "Message", "Timestamp"])?;
    for c in &contacts {
        writer.write_record([
            c.id.to_string().as_str(),
            c.name.as_str(),
            c.email.as_str(),
            c.message.as_str(),
            c.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().as_str(),
        ])?;
    }
    let body = writer
        .into_inner()
        .map_err(|e| AppError::CsvBuffer(e.to_string()))?;

    let filename = format!("contacts_{}.csv", Utc::now().format("%Y%m%d_%H%M%S"));
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, body))
}
