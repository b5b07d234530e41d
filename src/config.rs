//! Application configuration loaded from environment variables.
//!
//! Loaded once at startup and passed by reference to the components that
//! need it; nothing reads the environment after that.

use std::env;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// WiFi network name (association is owned by the platform layer)
    pub wifi_ssid: String,
    /// WiFi passphrase
    pub wifi_password: String,
    /// Activity server base URL, without a trailing slash
    pub api_base_url: String,
    /// Pre-shared API key sent on data calls
    pub api_key: String,
    /// Strava user ID whose data is displayed
    pub user_id: u64,
    /// Delay between successive polling cycles
    pub refresh_interval: Duration,
    /// Delay before resuming after a failed cycle
    pub error_retry: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            wifi_ssid: env::var("WIFI_SSID").map_err(|_| ConfigError::Missing("WIFI_SSID"))?,
            wifi_password: env::var("WIFI_PASSWORD")
                .map_err(|_| ConfigError::Missing("WIFI_PASSWORD"))?,
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key: env::var("API_KEY").map_err(|_| ConfigError::Missing("API_KEY"))?,
            user_id: env::var("USER_ID")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .unwrap_or(1),
            refresh_interval: Duration::from_secs(
                env::var("REFRESH_INTERVAL_SECONDS")
                    .unwrap_or_else(|_| "300".to_string())
                    .parse()
                    .unwrap_or(300),
            ),
            error_retry: Duration::from_secs(
                env::var("ERROR_RETRY_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            ),
        })
    }

    /// Default config for testing only: localhost server, tiny intervals.
    pub fn test_default() -> Self {
        Self {
            wifi_ssid: "test-network".to_string(),
            wifi_password: "test-password".to_string(),
            api_base_url: "http://127.0.0.1:8080".to_string(),
            api_key: "test-api-key".to_string(),
            user_id: 1,
            refresh_interval: Duration::from_millis(50),
            error_retry: Duration::from_millis(100),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
