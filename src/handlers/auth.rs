use axum::Form;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::PrivateCookieJar;
use minijinja::context;
use serde::Deserialize;
use subtle::ConstantTimeEq;
use tracing::info;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::middleware::auth;
use crate::middleware::flash::{self, Notice};
use crate::templates;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// GET /login -> the login form.
pub async fn login_page(jar: PrivateCookieJar) -> Result<impl IntoResponse, AppError> {
    let (jar, notice) = flash::take(jar);
    let page = templates::render("login.html", context! { flash => notice })?;
    Ok((jar, page))
}

/// POST /login -> exact-match credential check against configuration.
///
/// A match sets the session flag and redirects to the dashboard; a mismatch
/// leaves the session untouched and re-renders the form with a notice.
pub async fn login(
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let username_ok: bool = form
        .username
        .as_bytes()
        .ct_eq(CONFIG.admin_username.as_bytes())
        .into();
    let password_ok: bool = form
        .password
        .as_bytes()
        .ct_eq(CONFIG.admin_password.as_bytes())
        .into();

    if username_ok && password_ok {
        info!("admin logged in");
        let jar = auth::log_in(jar);
        let jar = flash::set(jar, Notice::success("Login successful!"));
        return Ok((jar, Redirect::to("/admin")).into_response());
    }

    let notice = Notice::new("error", "Invalid credentials.");
    let page = templates::render("login.html", context! { flash => notice })?;
    Ok((jar, page).into_response())
}

/// GET /logout -> drop the session flag and return to the public page.
pub async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    let jar = auth::log_out(jar);
    let jar = flash::set(jar, Notice::info("Logged out."));
    (jar, Redirect::to("/"))
}
