//! Application configuration loaded from environment variables.
//!
//! The Firebase API key is the public web API key, not a secret; it only
//! identifies the project to the Identity Toolkit endpoints.

use std::env;

const DEFAULT_AUTH_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Firebase web API key (public)
    pub firebase_api_key: String,
    /// Firebase / GCP project ID
    pub project_id: String,
    /// Identity Toolkit base URL (override for the auth emulator)
    pub auth_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            firebase_api_key: env::var("FIREBASE_API_KEY")
                .map_err(|_| ConfigError::Missing("FIREBASE_API_KEY"))?,
            project_id: env::var("FIREBASE_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("FIREBASE_PROJECT_ID"))?,
            auth_base_url: env::var("FIREBASE_AUTH_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_AUTH_BASE_URL.to_string()),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            firebase_api_key: "test_api_key".to_string(),
            project_id: "test-project".to_string(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("FIREBASE_API_KEY", "test_key");
        env::set_var("FIREBASE_PROJECT_ID", "test-project");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.firebase_api_key, "test_key");
        assert_eq!(config.project_id, "test-project");
        assert_eq!(config.auth_base_url, DEFAULT_AUTH_BASE_URL);
    }
}
