//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `HORIZON_URL` (optional): Horizon base URL, defaults to the public network
/// - `SIGNING_SERVICE_URL` (optional): base URL of the external signing service
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `REQUEST_TIMEOUT_SECS` (optional): upstream request timeout, defaults to 10
/// - `API_KEY_SHA256` (optional): hex SHA-256 of the bearer key guarding
///   routes that forward secrets to the signing service
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_horizon_url")]
    pub horizon_url: String,

    /// Signing routes answer 503 while this is unset.
    #[serde(default)]
    pub signing_service_url: Option<String>,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub api_key_sha256: Option<String>,
}

/// Public network Horizon if HORIZON_URL is not set.
fn default_horizon_url() -> String {
    "https://horizon.stellar.org".to_string()
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_timeout() -> u64 {
    10
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into its expected type (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: horizon_url -> HORIZON_URL
        envy::from_env::<Config>()
    }

    /// Configuration pointing at explicit upstreams, used by tests and tooling.
    pub fn for_upstreams(horizon_url: impl Into<String>, signing_service_url: Option<String>) -> Self {
        Self {
            horizon_url: horizon_url.into(),
            signing_service_url,
            server_port: 0,
            request_timeout_secs: default_timeout(),
            api_key_sha256: None,
        }
    }
}
