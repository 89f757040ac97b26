//! Configuration module for the Lernify client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Lernify backend API
    pub backend_url: String,
    /// Path to the durable session file (a single JSON slot)
    pub session_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let backend_url = env::var("LERNIFY_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let session_path = env::var("LERNIFY_SESSION_PATH")
            .unwrap_or_else(|_| "./data/session.json".to_string())
            .into();

        let log_level = env::var("LERNIFY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            backend_url,
            session_path,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("LERNIFY_BACKEND_URL");
        env::remove_var("LERNIFY_SESSION_PATH");
        env::remove_var("LERNIFY_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.session_path, PathBuf::from("./data/session.json"));
        assert_eq!(config.log_level, "info");
    }
}
