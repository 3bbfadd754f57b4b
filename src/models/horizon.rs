//! Horizon response shapes.
//!
//! These structs mirror the Horizon REST API. Only the fields this service
//! reads are typed; everything else is kept in `extra` and serialized back
//! untouched so the dashboard sees the full upstream record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `asset_type` value Horizon uses for XLM.
pub const NATIVE_ASSET_TYPE: &str = "native";

/// An account as returned by `GET /accounts/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Account {
    pub id: String,

    pub account_id: String,

    /// Sequence numbers exceed JSON's safe integer range, so Horizon sends a string.
    pub sequence: String,

    #[serde(default)]
    pub subentry_count: u32,

    #[serde(default)]
    pub balances: Vec<Balance>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of an account's `balances` array.
///
/// # JSON Example
///
/// ```json
/// {
///   "balance": "120.5000000",
///   "limit": "922337203685.4775807",
///   "asset_type": "credit_alphanum4",
///   "asset_code": "USDC",
///   "asset_issuer": "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Balance {
    /// Decimal string with seven fractional digits
    pub balance: String,

    pub asset_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,

    /// Trustline limit, absent for the native balance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Balance {
    pub fn is_native(&self) -> bool {
        self.asset_type == NATIVE_ASSET_TYPE
    }

    /// Display code: `XLM` for native, the asset code otherwise.
    pub fn display_code(&self) -> &str {
        if self.is_native() {
            "XLM"
        } else {
            self.asset_code.as_deref().unwrap_or("Unknown")
        }
    }
}

/// A payment-like operation from `GET /accounts/{id}/payments`.
///
/// Horizon returns `payment`, `create_account`, `path_payment_*` and
/// `account_merge` records on this endpoint. Fields that only some of them
/// carry are optional.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentRecord {
    pub id: String,

    #[serde(default)]
    pub paging_token: String,

    #[serde(rename = "type")]
    pub operation_type: String,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub transaction_hash: String,

    #[serde(default = "default_successful")]
    pub transaction_successful: bool,

    #[serde(default)]
    pub source_account: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    // create_account operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_balance: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_successful() -> bool {
    true
}

impl PaymentRecord {
    /// Amount moved by this operation as a decimal string.
    pub fn effective_amount(&self) -> &str {
        self.amount
            .as_deref()
            .or(self.starting_balance.as_deref())
            .unwrap_or("0")
    }

    /// Sender: `from` for payments, `funder` for account creation.
    pub fn sender(&self) -> Option<&str> {
        self.from.as_deref().or(self.funder.as_deref())
    }

    /// Receiver: `to` for payments, the created `account` otherwise.
    pub fn receiver(&self) -> Option<&str> {
        self.to.as_deref().or(self.account.as_deref())
    }

    pub fn asset_label(&self) -> &str {
        self.asset_code.as_deref().unwrap_or("XLM")
    }
}

/// HAL collection page wrapper.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "_embedded")]
    pub embedded: Option<Embedded<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Embedded<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

impl<T> Page<T> {
    pub fn into_records(self) -> Vec<T> {
        self.embedded.map(|e| e.records).unwrap_or_default()
    }
}
