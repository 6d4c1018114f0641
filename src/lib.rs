pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod templates;

pub use db::models::Contact;
pub use error::AppError;
