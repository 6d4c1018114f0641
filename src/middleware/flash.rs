//! One-shot flash notices carried across the post-redirect-get boundary in a
//! private cookie: set before a redirect, read and cleared on the next page
//! render.

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub level: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: &str, message: &str) -> Self {
        Self {
            level: level.to_string(),
            message: message.to_string(),
        }
    }

    pub fn success(message: &str) -> Self {
        Self::new("success", message)
    }

    pub fn danger(message: &str) -> Self {
        Self::new("danger", message)
    }

    pub fn info(message: &str) -> Self {
        Self::new("info", message)
    }
}

pub fn set(jar: PrivateCookieJar, notice: Notice) -> PrivateCookieJar {
    let Ok(value) = serde_json::to_string(&notice) else {
        return jar;
    };
    jar.add(
        Cookie::build(Cookie::new(FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::minutes(5))
            .build(),
    )
}

/// Read and clear the pending notice, if any. Unparseable cookie values are
/// discarded silently.
pub fn take(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<Notice>) {
    let notice = jar
        .get(FLASH_COOKIE)
        .and_then(|c| serde_json::from_str(c.value()).ok());
    let jar = jar.remove(
        Cookie::build(Cookie::new(FLASH_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    );
    (jar, notice)
}
