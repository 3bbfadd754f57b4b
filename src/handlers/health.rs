//! Health check endpoint for service monitoring.

use crate::{error::AppError, state::AppState};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
///
/// Returns service status and Horizon reachability.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Horizon reachability
    pub horizon: String,

    /// Whether a signing service is configured
    pub signing_service: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "horizon": "reachable",
///   "signing_service": "configured",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// # Response (502 Bad Gateway)
///
/// If Horizon is unreachable, returns standard error response.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    state.horizon.ping().await?;

    let signing_service = if state.signing().is_ok() {
        "configured"
    } else {
        "not_configured"
    };

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        horizon: "reachable".to_string(),
        signing_service: signing_service.to_string(),
        timestamp: Utc::now(),
    }))
}
