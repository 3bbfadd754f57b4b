//! Account lookup query parameters and response bodies.
//!
//! This module defines:
//! - `AccountQuery`: the `publicKey` query parameter shared by account routes
//! - `AccountResponse`, `AccountCheckResponse`, `BalanceResponse`,
//!   `TrustlinesResponse`: JSON bodies returned to the dashboard

use serde::{Deserialize, Serialize};

use crate::{
    error::ACCOUNT_NOT_FOUND_MESSAGE,
    models::horizon::{Account, Balance},
    services::horizon_service::AssetBalance,
};

/// `?publicKey=G...`
///
/// `accountId` is accepted as an alias; older dashboard pages send it.
#[derive(Debug, Deserialize)]
pub struct AccountQuery {
    #[serde(rename = "publicKey", alias = "accountId", default)]
    pub public_key: String,
}

/// `?publicKey=G...&assetCode=USDC&assetIssuer=G...`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceQuery {
    #[serde(alias = "accountId", default)]
    pub public_key: String,

    #[serde(default = "default_asset_code")]
    pub asset_code: String,

    #[serde(default)]
    pub asset_issuer: Option<String>,
}

fn default_asset_code() -> String {
    "XLM".to_string()
}

/// Response body for `GET /api/account`.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": true,
///   "exists": true,
///   "account": { "id": "G...", "balances": [ ... ], ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub success: bool,
    pub exists: bool,
    pub account: Account,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            success: true,
            exists: true,
            account,
        }
    }
}

/// Response body for `GET /api/account/check`.
///
/// A missing account is a successful check with `exists: false`.
#[derive(Debug, Serialize)]
pub struct AccountCheckResponse {
    pub success: bool,
    pub exists: bool,
    pub message: String,
}

impl AccountCheckResponse {
    pub fn new(exists: bool) -> Self {
        let message = if exists {
            "Account exists on the network"
        } else {
            ACCOUNT_NOT_FOUND_MESSAGE
        };

        Self {
            success: true,
            exists,
            message: message.to_string(),
        }
    }
}

/// Response body for `GET /api/account/balance`.
///
/// Carries either `balance` or `balances`, see [`AssetBalance`].
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub success: bool,
    pub exists: bool,
    #[serde(rename = "assetCode")]
    pub asset_code: String,
    #[serde(flatten)]
    pub balance: AssetBalance,
}

/// Response body for `GET /api/trustlines`.
#[derive(Debug, Serialize)]
pub struct TrustlinesResponse {
    pub success: bool,
    pub exists: bool,
    pub trustlines: Vec<Balance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_accepts_legacy_alias() {
        let q: AccountQuery = serde_json::from_str(r#"{"accountId": "GABC"}"#).unwrap();
        assert_eq!(q.public_key, "GABC");

        let q: AccountQuery = serde_json::from_str(r#"{}"#).unwrap();
        assert!(q.public_key.is_empty());
    }

    #[test]
    fn balance_response_flattens_single_balance() {
        let body = BalanceResponse {
            success: true,
            exists: true,
            asset_code: "XLM".to_string(),
            balance: AssetBalance::Single {
                balance: "12.0000000".to_string(),
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["balance"], "12.0000000");
        assert_eq!(json["assetCode"], "XLM");
    }

    #[test]
    fn check_message_depends_on_existence() {
        assert_eq!(
            AccountCheckResponse::new(true).message,
            "Account exists on the network"
        );
        assert!(!AccountCheckResponse::new(false).exists);
    }
}
