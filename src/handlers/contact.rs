use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::PrivateCookieJar;
use minijinja::context;
use serde::Deserialize;
use tracing::error;

use crate::error::AppError;
use crate::middleware::flash::{self, Notice};
use crate::router::AppState;
use crate::templates;

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// GET / -> the public page with the contact form.
pub async fn home_page(jar: PrivateCookieJar) -> Result<impl IntoResponse, AppError> {
    let (jar, notice) = flash::take(jar);
    let page = templates::render("index.html", context! { flash => notice })?;
    Ok((jar, page))
}

/// POST / -> validate, persist, and redirect back to the form anchor.
///
/// Rows are only written when all three fields survive trimming; a failed
/// insert is flashed to the user and logged, never surfaced as a 500. Every
/// outcome redirects to `/#contact`.
pub async fn submit(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<ContactForm>,
) -> impl IntoResponse {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    let notice = if name.is_empty() || email.is_empty() || message.is_empty() {
        Notice::danger("Please fill all fields.")
    } else {
        match state.storage.insert(name, email, message).await {
            Ok(id) => {
                tracing::info!(id, "contact message stored");
                Notice::success("Thank you! Your message has been saved.")
            }
            Err(e) => {
                error!(error = %e, "failed to store contact message");
                Notice::danger("Error saving message.")
            }
        }
    };

    let jar = flash::set(jar, notice);
    (jar, Redirect::to("/#contact"))
}
