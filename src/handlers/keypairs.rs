//! Keypair generation endpoint.

use axum::{Json, extract::State};
use serde_json::Value;

use crate::{error::AppError, state::AppState};

/// `GET /api/keypair`
///
/// Proxies the signing service's `create-keypair`. The generated secret is
/// returned to the caller and not retained here.
pub async fn create_keypair(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let keypair = state.signing()?.create_keypair().await?;
    Ok(Json(keypair))
}
