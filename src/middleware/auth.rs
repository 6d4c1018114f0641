use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};

use crate::router::AppState;

const SESSION_COOKIE: &str = "session";
const LOGGED_IN: &str = "1";

/// Mark the session as authenticated. The cookie carries no max-age, so it
/// lives for the browser session only.
pub fn log_in(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build(Cookie::new(SESSION_COOKIE, LOGGED_IN))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

/// Drop the session flag unconditionally.
pub fn log_out(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(
        Cookie::build(Cookie::new(SESSION_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

pub fn is_logged_in(jar: &PrivateCookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value() == LOGGED_IN)
        .unwrap_or(false)
}

/// Gate for admin-only handlers: a pure session-state check, no credential
/// re-verification per request. Anonymous callers are redirected to `/login`.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::from_request_parts(parts, state)
            .await
            .map_err(|err| match err {})?;
        if is_logged_in(&jar) {
            Ok(Self)
        } else {
            Err(Redirect::to("/login").into_response())
        }
    }
}
