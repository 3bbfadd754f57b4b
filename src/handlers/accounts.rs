//! Account lookup HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /api/account - Account details from Horizon
//! - GET /api/account/check - Whether the account exists
//! - GET /api/account/balance - Balance of a single asset

use crate::{
    error::AppError,
    extract::QueryParams,
    models::account::{
        AccountCheckResponse, AccountQuery, AccountResponse, BalanceQuery, BalanceResponse,
    },
    services::horizon_service::validate_public_key,
    state::AppState,
};
use axum::{
    Json,
    extract::State,
};

/// Get account details.
///
/// # Endpoint
///
/// `GET /api/account?publicKey=G...`
///
/// # Response
///
/// - **Success (200 OK)**: `{ "success": true, "exists": true, "account": { ... } }`
/// - **Error (400)**: Missing or malformed public key
/// - **Error (404)**: Account not activated on the network (`"exists": false`)
/// - **Error (502)**: Horizon failure
///
/// The account object is Horizon's record, passed through unchanged.
pub async fn get_account(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<AccountQuery>,
) -> Result<Json<AccountResponse>, AppError> {
    validate_public_key(&query.public_key)?;

    let account = state
        .horizon
        .get_account(&query.public_key)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(account.into()))
}

/// Check whether an account exists.
///
/// # Endpoint
///
/// `GET /api/account/check?publicKey=G...`
///
/// A missing account is not an error here: the response is 200 with
/// `"exists": false`.
pub async fn check_account(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<AccountQuery>,
) -> Result<Json<AccountCheckResponse>, AppError> {
    validate_public_key(&query.public_key)?;

    let exists = state.horizon.check_account_exists(&query.public_key).await?;

    Ok(Json(AccountCheckResponse::new(exists)))
}

/// Balance of one asset.
///
/// # Endpoint
///
/// `GET /api/account/balance?publicKey=G...&assetCode=USDC&assetIssuer=G...`
///
/// `assetCode` defaults to XLM. Without `assetIssuer`, every trustline with
/// the given code is returned under `balances`.
pub async fn get_balance(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<BalanceQuery>,
) -> Result<Json<BalanceResponse>, AppError> {
    validate_public_key(&query.public_key)?;

    let issuer = query.asset_issuer.as_deref().filter(|i| !i.is_empty());
    let balance = state
        .horizon
        .get_asset_balance(&query.public_key, &query.asset_code, issuer)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(BalanceResponse {
        success: true,
        exists: true,
        asset_code: query.asset_code,
        balance,
    }))
}
