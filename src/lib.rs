//! Posts API - A minimal JSON REST resource
//!
//! Lists, shows, creates and updates posts, each rendered with its author.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::ApiError;
