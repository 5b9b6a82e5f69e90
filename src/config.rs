//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup. Every variable has a default, so
//! the service starts with no environment at all.
//!
//! ## Variables
//!
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - public base used when building short URLs
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)

use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL prepended to generated codes in API responses.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
        }
    }
}
