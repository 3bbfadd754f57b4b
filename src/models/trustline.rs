//! Trustline request types.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Request body for `POST /api/trustlines`.
///
/// # JSON Example
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
/// `limit` is optional; the signing service uses the maximum when absent.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustlineRequest {
    #[serde(default)]
    pub secret_key: String,

    #[serde(default)]
    pub asset_code: String,

    #[serde(default)]
    pub asset_issuer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

impl TrustlineRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.secret_key.is_empty() || self.asset_code.is_empty() || self.asset_issuer.is_empty()
        {
            return Err(AppError::InvalidRequest(
                "Missing required parameters: secretKey, assetCode, or assetIssuer".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for TrustlineRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustlineRequest")
            .field("secret_key", &"<redacted>")
            .field("asset_code", &self.asset_code)
            .field("asset_issuer", &self.asset_issuer)
            .field("limit", &self.limit)
            .finish()
    }
}
