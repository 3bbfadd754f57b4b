//! Payment HTTP handlers.
//!
//! This module implements payment-related API endpoints:
//! - GET /api/payments - Payment history from Horizon
//! - POST /api/payment - Send a payment through the signing service

use crate::{
    error::AppError,
    extract::{JsonBody, QueryParams},
    models::{horizon::PaymentRecord, payment::SendPaymentRequest},
    services::{
        analytics_service::matches_search,
        horizon_service::{DEFAULT_PAGE_LIMIT, Order, validate_public_key},
    },
    state::AppState,
};
use axum::{
    Json,
    extract::State,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `?publicKey=G...&limit=10&order=desc&search=usdc`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentsQuery {
    #[serde(alias = "accountId", default)]
    pub public_key: String,

    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default)]
    pub order: Order,

    #[serde(default)]
    pub search: Option<String>,
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Serialize)]
pub struct PaymentsResponse {
    pub success: bool,
    pub exists: bool,
    pub payments: Vec<PaymentRecord>,
}

/// List recent payments of an account.
///
/// # Endpoint
///
/// `GET /api/payments?publicKey=G...&limit=10&order=desc`
///
/// # Query Parameters
///
/// - `publicKey` (required; `accountId` accepted as alias)
/// - `limit` (default 10, clamped to 1..=200)
/// - `order` (`asc` or `desc`, default `desc`)
/// - `search` (optional case-insensitive filter over id, amount, asset,
///   sender, receiver and transaction hash)
///
/// # Response
///
/// - **Success (200 OK)**: Horizon payment records, unchanged
/// - **Error (404)**: Account not activated on the network
pub async fn list_payments(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PaymentsQuery>,
) -> Result<Json<PaymentsResponse>, AppError> {
    validate_public_key(&query.public_key)?;

    let mut payments = state
        .horizon
        .get_payments(&query.public_key, query.limit, query.order)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    if let Some(term) = query.search.as_deref() {
        payments.retain(|p| matches_search(p, term));
    }

    Ok(Json(PaymentsResponse {
        success: true,
        exists: true,
        payments,
    }))
}

/// Send a payment.
///
/// # Endpoint
///
/// `POST /api/payment`
///
/// # Request Body
///
/// ```json
/// {
///   "sourceSecret": "S...",
///   "destinationAddress": "G...",
///   "amount": "10",
///   "assetCode": "XLM",
///   "assetIssuer": null
/// }
/// ```
///
/// # Process
///
/// 1. Signing service builds and signs the transaction
/// 2. Signing service submits the signed envelope
///
/// The submission result is returned unchanged.
pub async fn send_payment(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SendPaymentRequest>,
) -> Result<Json<Value>, AppError> {
    request.validate()?;

    let result = state.signing()?.send_payment(&request).await?;

    Ok(Json(result))
}
