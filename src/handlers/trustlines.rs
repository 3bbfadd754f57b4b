//! Trustline HTTP handlers.
//!
//! - GET /api/trustlines - Non-native balances of an account
//! - POST /api/trustlines (and legacy /api/trustline) - Add a trustline

use crate::{
    error::AppError,
    extract::{JsonBody, QueryParams},
    models::{
        account::{AccountQuery, TrustlinesResponse},
        trustline::TrustlineRequest,
    },
    services::horizon_service::validate_public_key,
    state::AppState,
};
use axum::{
    Json,
    extract::State,
};
use serde_json::Value;

/// List the trustlines of an account.
///
/// # Endpoint
///
/// `GET /api/trustlines?publicKey=G...`
///
/// # Response
///
/// - **Success (200 OK)**: Every balance except the native XLM one
/// - **Error (404)**: Account not activated on the network
pub async fn list_trustlines(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<AccountQuery>,
) -> Result<Json<TrustlinesResponse>, AppError> {
    validate_public_key(&query.public_key)?;

    let trustlines = state
        .horizon
        .get_trustlines(&query.public_key)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(TrustlinesResponse {
        success: true,
        exists: true,
        trustlines,
    }))
}

/// Add a trustline through the signing service.
///
/// # Request Body
///
/// ```json
/// {
///   "secretKey": "S...",
///   "assetCode": "USDC",
///   "assetIssuer": "GA5Z...",
///   "limit": "1000"
/// }
/// ```
///
/// The signing service answer is returned unchanged.
pub async fn create_trustline(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<TrustlineRequest>,
) -> Result<Json<Value>, AppError> {
    request.validate()?;

    tracing::info!(
        asset_code = %request.asset_code,
        asset_issuer = %request.asset_issuer,
        "Forwarding trustline request"
    );

    let result = state.signing()?.create_trustline(&request).await?;

    Ok(Json(result))
}
