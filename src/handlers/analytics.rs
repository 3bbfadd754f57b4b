//! Analytics and dashboard HTTP handlers.
//!
//! Both endpoints fetch the account and its payments concurrently and
//! reshape them server-side so the pages only render.

use crate::{
    error::AppError,
    extract::QueryParams,
    models::{
        analytics::AnalyticsReport,
        horizon::{Account, Balance, PaymentRecord},
        payment::PaymentSummary,
    },
    services::{
        analytics_service::{
            asset_distribution, daily_volume, summarize_payment, transaction_counts,
            transaction_history,
        },
        horizon_service::{DEFAULT_PAGE_LIMIT, Order, validate_public_key},
    },
    state::AppState,
};
use axum::{
    Json,
    extract::State,
};
use serde::{Deserialize, Serialize};

/// `?publicKey=G...&limit=50`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewQuery {
    #[serde(alias = "accountId", default)]
    pub public_key: String,

    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub success: bool,
    pub public_key: String,
    pub balances: Vec<Balance>,
    pub recent_payments: Vec<PaymentSummary>,
}

/// Account and newest payments, fetched side by side.
///
/// Both lookups 404 for unknown accounts; either `None` means not found.
async fn load_overview(
    state: &AppState,
    public_key: &str,
    limit: u32,
) -> Result<(Account, Vec<PaymentRecord>), AppError> {
    let (account, payments) = tokio::try_join!(
        state.horizon.get_account(public_key),
        state.horizon.get_payments(public_key, limit, Order::Desc),
    )?;

    match (account, payments) {
        (Some(account), Some(payments)) => Ok((account, payments)),
        _ => Err(AppError::AccountNotFound),
    }
}

/// Analytics for one account.
///
/// # Endpoint
///
/// `GET /api/analytics?publicKey=G...&limit=50`
///
/// # Response (200)
///
/// ```json
/// {
///   "success": true,
///   "publicKey": "G...",
///   "assets": [{ "code": "XLM", "balance": "75.0", "value": 75.0, "percentage": 75.0 }],
///   "transactions": [{ "date": "2025-03-01", "amount": 10.0, "asset": "XLM" }],
///   "dailyVolume": [{ "date": "2025-03-01", "volume": 10.0 }],
///   "transactionCounts": [{ "asset": "XLM", "count": 1 }]
/// }
/// ```
pub async fn get_analytics(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<OverviewQuery>,
) -> Result<Json<AnalyticsReport>, AppError> {
    validate_public_key(&query.public_key)?;

    let (account, payments) = load_overview(&state, &query.public_key, query.limit).await?;

    let transactions = transaction_history(&payments);

    Ok(Json(AnalyticsReport {
        success: true,
        assets: asset_distribution(&account.balances),
        daily_volume: daily_volume(&transactions),
        transaction_counts: transaction_counts(&transactions),
        transactions,
        public_key: query.public_key,
    }))
}

/// Balances plus recent payment rows for the dashboard page.
///
/// # Endpoint
///
/// `GET /api/dashboard?publicKey=G...&limit=10`
pub async fn get_dashboard(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<OverviewQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    validate_public_key(&query.public_key)?;

    let (account, payments) = load_overview(&state, &query.public_key, query.limit).await?;

    let recent_payments = payments
        .iter()
        .map(|p| summarize_payment(p, &query.public_key, state.explorer_network))
        .collect();

    Ok(Json(DashboardResponse {
        success: true,
        balances: account.balances,
        recent_payments,
        public_key: query.public_key,
    }))
}
