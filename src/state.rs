//! Shared application state handed to every handler.

use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    error::AppError,
    services::{
        analytics_service::explorer_network, horizon_service::HorizonClient,
        signing_service::SigningClient,
    },
};

/// Cloned into each request by axum; the HTTP clients share their pools.
#[derive(Debug, Clone)]
pub struct AppState {
    pub horizon: HorizonClient,
    signing: Option<SigningClient>,
    /// Lowercase hex SHA-256 of the bearer key, when the guard is enabled
    pub api_key_hash: Option<Arc<str>>,
    pub explorer_network: &'static str,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let timeout = Duration::from_secs(config.request_timeout_secs);

        let horizon = HorizonClient::new(&config.horizon_url, timeout)?;
        let signing = config
            .signing_service_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| SigningClient::new(url, timeout))
            .transpose()?;

        Ok(Self {
            explorer_network: explorer_network(&config.horizon_url),
            horizon,
            signing,
            api_key_hash: config
                .api_key_sha256
                .as_deref()
                .map(|h| Arc::from(h.trim().to_lowercase())),
        })
    }

    /// The signing client, or `SigningNotConfigured` when none is set up.
    pub fn signing(&self) -> Result<&SigningClient, AppError> {
        self.signing.as_ref().ok_or(AppError::SigningNotConfigured)
    }
}
