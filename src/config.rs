//! Application configuration loaded from environment variables.
//!
//! All configuration is read once at startup. The Gemini API key is
//! optional: without it the planner runs in fallback-only mode, which is
//! also what the test suite uses.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// MongoDB database name
    pub mongodb_db: String,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Generative-language API key; None puts the planner in fallback mode
    pub gemini_api_key: Option<String>,
    /// Base URL of the exchange-rate API
    pub exchange_api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            mongodb_uri: env::var("MONGODB_URI").map_err(|_| ConfigError::Missing("MONGODB_URI"))?,
            mongodb_db: env::var("MONGODB_DB").unwrap_or_else(|_| "tripweaver".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            gemini_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            exchange_api_url: env::var("EXCHANGE_API_URL")
                .unwrap_or_else(|_| "https://open.er-api.com/v6/latest".to_string()),
        })
    }

    /// Config for tests only: no external services configured.
    pub fn test_default() -> Self {
        Self {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            mongodb_db: "tripweaver-test".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            gemini_api_key: None,
            exchange_api_url: "https://open.er-api.com/v6/latest".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
