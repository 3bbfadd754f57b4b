//! Horizon service - read-only access to the Stellar ledger.
//!
//! Thin wrapper over the Horizon REST API. Each call is one HTTP request;
//! a 404 for an account is reported as `None` rather than an error because
//! unfunded accounts are an expected state for the dashboard.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    models::horizon::{Account, Balance, Page, PaymentRecord},
};

const SERVICE_NAME: &str = "Horizon";

/// Horizon caps page sizes at 200.
pub const MAX_PAGE_LIMIT: u32 = 200;
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Sort order for Horizon collections.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Asc => f.write_str("asc"),
            Order::Desc => f.write_str("desc"),
        }
    }
}

/// Balance lookup result for a single asset code.
///
/// A code without an issuer may match several trustlines (same code,
/// different issuers), in which case all of them are returned.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum AssetBalance {
    Single { balance: String },
    Matches { balances: Vec<Balance> },
}

/// Client for one Horizon instance.
#[derive(Debug, Clone)]
pub struct HorizonClient {
    http: Client,
    base_url: String,
}

impl HorizonClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Reachability probe against the Horizon root resource.
    pub async fn ping(&self) -> Result<(), AppError> {
        let url = format!("{}/", self.base_url);
        let response = self.http.get(&url).send().await?;
        ensure_success(&url, response).await?;
        Ok(())
    }

    /// Whether the account has been created (funded) on the network.
    pub async fn check_account_exists(&self, public_key: &str) -> Result<bool, AppError> {
        let url = self.account_url(public_key);
        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(public_key, "Account not found on Horizon");
            return Ok(false);
        }

        ensure_success(&url, response).await?;
        Ok(true)
    }

    /// Fetch account details, `None` if the account does not exist.
    pub async fn get_account(&self, public_key: &str) -> Result<Option<Account>, AppError> {
        let url = self.account_url(public_key);
        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let account = ensure_success(&url, response).await?.json::<Account>().await?;
        Ok(Some(account))
    }

    /// Fetch the most recent payment operations of an account.
    ///
    /// `None` when the account does not exist. Merged accounts keep their
    /// payment history on Horizon, so existence is checked on the account
    /// resource first rather than inferred from the collection.
    pub async fn get_payments(
        &self,
        public_key: &str,
        limit: u32,
        order: Order,
    ) -> Result<Option<Vec<PaymentRecord>>, AppError> {
        if !self.check_account_exists(public_key).await? {
            return Ok(None);
        }

        let url = format!("{}/payments", self.account_url(public_key));
        let limit = clamp_limit(limit);

        let response = self
            .http
            .get(&url)
            .query(&[("limit", limit.to_string()), ("order", order.to_string())])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let page = ensure_success(&url, response)
            .await?
            .json::<Page<PaymentRecord>>()
            .await?;

        Ok(Some(page.into_records()))
    }

    /// Balance of one asset held by the account.
    pub async fn get_asset_balance(
        &self,
        public_key: &str,
        asset_code: &str,
        asset_issuer: Option<&str>,
    ) -> Result<Option<AssetBalance>, AppError> {
        Ok(self
            .get_account(public_key)
            .await?
            .map(|account| select_asset_balance(&account.balances, asset_code, asset_issuer)))
    }

    /// Non-native balances (trustlines) of the account.
    pub async fn get_trustlines(&self, public_key: &str) -> Result<Option<Vec<Balance>>, AppError> {
        Ok(self.get_account(public_key).await?.map(trustlines))
    }

    fn account_url(&self, public_key: &str) -> String {
        format!("{}/accounts/{}", self.base_url, public_key)
    }
}

/// Pass successful responses through, turn the rest into `AppError::Upstream`.
///
/// Horizon error bodies are RFC 7807 problem documents; `detail` (or
/// `title`) is surfaced when present, the raw body otherwise.
async fn ensure_success(url: &str, response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(url, status = status.as_u16(), "Horizon request failed");

    Err(AppError::Upstream {
        service: SERVICE_NAME,
        status: status.as_u16(),
        message: problem_message(&body)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16())),
    })
}

fn problem_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .or_else(|| value.get("title"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_PAGE_LIMIT)
}

/// Pick the balance of `asset_code` out of an account's balances.
///
/// # Rules
///
/// - `XLM`: the native balance, any issuer is ignored
/// - code with issuer: the exact trustline
/// - code without issuer: every trustline with that code
///
/// Assets the account does not hold report a balance of `"0"`.
pub fn select_asset_balance(
    balances: &[Balance],
    asset_code: &str,
    asset_issuer: Option<&str>,
) -> AssetBalance {
    let zero = || AssetBalance::Single {
        balance: "0".to_string(),
    };

    match (asset_code, asset_issuer) {
        ("XLM", _) => balances
            .iter()
            .find(|b| b.is_native())
            .map(|b| AssetBalance::Single {
                balance: b.balance.clone(),
            })
            .unwrap_or_else(zero),
        (code, Some(issuer)) => balances
            .iter()
            .find(|b| {
                b.asset_code.as_deref() == Some(code) && b.asset_issuer.as_deref() == Some(issuer)
            })
            .map(|b| AssetBalance::Single {
                balance: b.balance.clone(),
            })
            .unwrap_or_else(zero),
        (code, None) => {
            let matches: Vec<Balance> = balances
                .iter()
                .filter(|b| b.asset_code.as_deref() == Some(code))
                .cloned()
                .collect();

            if matches.is_empty() {
                zero()
            } else {
                AssetBalance::Matches { balances: matches }
            }
        }
    }
}

pub fn trustlines(account: Account) -> Vec<Balance> {
    account
        .balances
        .into_iter()
        .filter(|b| !b.is_native())
        .collect()
}

/// Stellar account ids: `G` followed by 55 base32 characters.
pub fn is_valid_public_key(key: &str) -> bool {
    key.len() == 56
        && key.starts_with('G')
        && key
            .bytes()
            .all(|b| b.is_ascii_uppercase() || (b'2'..=b'7').contains(&b))
}

/// Reject keys that are not Stellar account ids before they reach a URL path.
pub fn validate_public_key(key: &str) -> Result<(), AppError> {
    if key.is_empty() {
        return Err(crate::error::missing("Public key"));
    }
    if !is_valid_public_key(key) {
        return Err(AppError::InvalidRequest(
            "Invalid Stellar address format".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    const USDC_ISSUER: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";
    const OTHER_ISSUER: &str = "GADUOYRGUXBTKDWGVCL2ZGEIRXG3ONYSGI4AMM3YVNM2H3JAWQVEXW3I";

    fn native(balance: &str) -> Balance {
        Balance {
            balance: balance.to_string(),
            asset_type: "native".to_string(),
            asset_code: None,
            asset_issuer: None,
            limit: None,
            extra: Map::new(),
        }
    }

    fn credit(code: &str, issuer: &str, balance: &str) -> Balance {
        Balance {
            balance: balance.to_string(),
            asset_type: "credit_alphanum4".to_string(),
            asset_code: Some(code.to_string()),
            asset_issuer: Some(issuer.to_string()),
            limit: Some("1000".to_string()),
            extra: Map::new(),
        }
    }

    fn single(balance: &str) -> AssetBalance {
        AssetBalance::Single {
            balance: balance.to_string(),
        }
    }

    #[test]
    fn xlm_uses_native_balance() {
        let balances = vec![credit("USDC", USDC_ISSUER, "5"), native("100.5")];
        assert_eq!(select_asset_balance(&balances, "XLM", None), single("100.5"));
    }

    #[test]
    fn xlm_ignores_issuer() {
        let balances = vec![native("5.0000000"), credit("XLM", USDC_ISSUER, "9")];
        assert_eq!(
            select_asset_balance(&balances, "XLM", Some(USDC_ISSUER)),
            single("5.0000000")
        );
    }

    #[test]
    fn missing_native_balance_is_zero() {
        assert_eq!(select_asset_balance(&[], "XLM", None), single("0"));
    }

    #[test]
    fn issuer_selects_exact_trustline() {
        let balances = vec![
            credit("USDC", USDC_ISSUER, "5"),
            credit("USDC", OTHER_ISSUER, "7"),
        ];
        assert_eq!(
            select_asset_balance(&balances, "USDC", Some(OTHER_ISSUER)),
            single("7")
        );
        assert_eq!(
            select_asset_balance(&balances, "BTC", Some(OTHER_ISSUER)),
            single("0")
        );
    }

    #[test]
    fn code_without_issuer_returns_every_match() {
        let balances = vec![
            native("1"),
            credit("USDC", USDC_ISSUER, "5"),
            credit("USDC", OTHER_ISSUER, "7"),
        ];

        match select_asset_balance(&balances, "USDC", None) {
            AssetBalance::Matches { balances } => assert_eq!(balances.len(), 2),
            other => panic!("expected matches, got {other:?}"),
        }
        assert_eq!(select_asset_balance(&balances, "ETH", None), single("0"));
    }

    #[test]
    fn trustlines_skip_native() {
        let account = Account {
            id: "G".to_string(),
            account_id: "G".to_string(),
            sequence: "1".to_string(),
            subentry_count: 1,
            balances: vec![native("1"), credit("USDC", USDC_ISSUER, "5")],
            extra: Map::new(),
        };

        let lines = trustlines(account);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].asset_code.as_deref(), Some("USDC"));
    }

    #[test]
    fn public_key_format() {
        assert!(is_valid_public_key(USDC_ISSUER));
        assert!(!is_valid_public_key("GABC"));
        assert!(!is_valid_public_key(&USDC_ISSUER.replacen('G', "S", 1)));
        assert!(!is_valid_public_key(&USDC_ISSUER.to_lowercase()));
        assert!(!is_valid_public_key(&format!("{}/..", &USDC_ISSUER[..53])));
        assert!(matches!(
            validate_public_key(""),
            Err(AppError::InvalidRequest(msg)) if msg == "Public key is required"
        ));
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(10), 10);
        assert_eq!(clamp_limit(5000), MAX_PAGE_LIMIT);
    }

    #[test]
    fn problem_detail_is_preferred() {
        let body = r#"{"type":"x","title":"Bad Request","status":400,"detail":"invalid cursor"}"#;
        assert_eq!(problem_message(body).as_deref(), Some("invalid cursor"));
        assert_eq!(
            problem_message(r#"{"title":"Rate Limit Exceeded"}"#).as_deref(),
            Some("Rate Limit Exceeded")
        );
        assert_eq!(problem_message("<html>"), None);
    }
}
