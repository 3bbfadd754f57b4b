//! Analytics report types returned by `GET /api/analytics`.

use serde::Serialize;

/// Share of one balance in the account's holdings.
///
/// Values are summed across assets without price conversion.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssetShare {
    pub code: String,
    pub balance: String,
    pub value: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionPoint {
    /// UTC date, `YYYY-MM-DD`
    pub date: String,
    pub amount: f64,
    pub asset: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VolumePoint {
    pub date: String,
    pub volume: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AssetCount {
    pub asset: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub success: bool,
    pub public_key: String,
    pub assets: Vec<AssetShare>,
    pub transactions: Vec<TransactionPoint>,
    pub daily_volume: Vec<VolumePoint>,
    pub transaction_counts: Vec<AssetCount>,
}
