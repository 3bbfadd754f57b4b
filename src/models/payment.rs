//! Payment request/response types.
//!
//! This module defines:
//! - `SendPaymentRequest`: body for `POST /api/payment`
//! - `PaymentRequestInput` / `PaymentRequestResponse`: SEP-7 payment links
//! - `PaymentSummary`: a Horizon payment reshaped for dashboard tables

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

fn default_asset_code() -> String {
    "XLM".to_string()
}

/// Request body for sending a payment through the signing service.
///
/// # JSON Example
///
/// ```json
/// {
///   "sourceSecret": "S...",
///   "destinationAddress": "G...",
///   "amount": "12.5",
///   "assetCode": "USDC",
///   "assetIssuer": "GA5Z..."
/// }
/// ```
///
/// The secret is forwarded to the signing service and never logged.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPaymentRequest {
    #[serde(default)]
    pub source_secret: String,

    #[serde(default)]
    pub destination_address: String,

    #[serde(default)]
    pub amount: String,

    #[serde(default = "default_asset_code")]
    pub asset_code: String,

    #[serde(default)]
    pub asset_issuer: Option<String>,
}

impl SendPaymentRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.source_secret.is_empty()
            || self.destination_address.is_empty()
            || self.amount.is_empty()
        {
            return Err(AppError::InvalidRequest(
                "Missing required parameters".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for SendPaymentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendPaymentRequest")
            .field("source_secret", &"<redacted>")
            .field("destination_address", &self.destination_address)
            .field("amount", &self.amount)
            .field("asset_code", &self.asset_code)
            .field("asset_issuer", &self.asset_issuer)
            .finish()
    }
}

/// Request body for generating a payment link / QR code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestInput {
    #[serde(default)]
    pub destination_address: String,

    #[serde(default)]
    pub amount: String,

    #[serde(default = "default_asset_code")]
    pub asset_code: String,

    #[serde(default)]
    pub asset_issuer: Option<String>,

    #[serde(default)]
    pub memo: String,
}

/// A generated payment request.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": true,
///   "paymentId": "pay_5f0c3e1a9b2d4c7e",
///   "paymentUrl": "web+stellar:pay?destination=G...&amount=10",
///   "destinationAddress": "G...",
///   "amount": "10",
///   "assetCode": "XLM",
///   "assetIssuer": null,
///   "memo": "",
///   "timestamp": "2025-03-28T17:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestResponse {
    pub success: bool,
    pub payment_id: String,
    pub payment_url: String,
    pub destination_address: String,
    pub amount: String,
    pub asset_code: String,
    pub asset_issuer: Option<String>,
    pub memo: String,
    pub timestamp: DateTime<Utc>,
}

/// Direction of a payment relative to the viewed account.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failed,
}

/// One row of the dashboard/payments tables.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub amount: String,
    pub asset: String,
    pub from: String,
    pub to: String,
    pub direction: Direction,
    pub status: PaymentStatus,
    pub operation_type: String,
    pub transaction_hash: String,
    pub explorer_url: String,
}
