use crate::config::CONFIG;
use crate::db::ContactStorage;
use crate::handlers::{admin, auth, contact};
use axum::Router;
use axum::extract::FromRef;
use axum::routing::get;
use axum_extra::extract::cookie::Key;

#[derive(Clone)]
pub struct AppState {
    pub storage: ContactStorage,
    key: Key,
}

impl AppState {
    /// Panics if `CONFIG.secret_key` is shorter than 32 bytes.
    pub fn new(storage: ContactStorage) -> Self {
        Self {
            storage,
            key: Key::derive_from(CONFIG.secret_key.as_bytes()),
        }
    }
}

// Lets PrivateCookieJar pull its encryption key straight from state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(contact::home_page).post(contact::submit))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/admin", get(admin::dashboard))
        .route("/admin/export", get(admin::export_csv))
        .with_state(state)
}
