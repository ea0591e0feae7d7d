//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Name of the author seeded at startup and credited with new posts
    pub default_author_name: String,
    /// Maximum number of characters in a post title
    pub max_title_length: usize,
    /// Maximum number of characters in a post description
    pub max_description_length: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_AUTHOR_NAME` - Seeded author name (default: "Anonymous")
    /// - `MAX_TITLE_LENGTH` - Title length limit (default: 255)
    /// - `MAX_DESCRIPTION_LENGTH` - Description length limit (default: 10000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            default_author_name: env::var("DEFAULT_AUTHOR_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.default_author_name),
            max_title_length: parse_var("MAX_TITLE_LENGTH").unwrap_or(defaults.max_title_length),
            max_description_length: parse_var("MAX_DESCRIPTION_LENGTH")
                .unwrap_or(defaults.max_description_length),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_author_name: "Anonymous".to_string(),
            max_title_length: 255,
            max_description_length: 10_000,
        }
    }
}
