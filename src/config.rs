use figment::{Figment, providers::Serialized};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

/// Static application configuration.
///
/// Values are fixed at startup: defaults are the single source, extracted
/// through figment so a file/env provider can be layered in later without
/// touching call sites. `secret_key` must be at least 32 bytes; it seeds the
/// private cookie key for session and flash cookies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub secret_key: String,
    pub database_path: PathBuf,
    pub admin_username: String,
    pub admin_password: String,
    pub listen: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            secret_key: "super-secret-key-change-in-prod-0123456789abcdef".to_string(),
            database_path: PathBuf::from("instance/app.db"),
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            listen: "0.0.0.0:5001".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Figment::from(Serialized::defaults(Config::default()))
            .extract()
            .expect("default config is extractable")
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);
