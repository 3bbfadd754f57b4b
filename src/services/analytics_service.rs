//! Aggregation of Horizon data for the analytics and dashboard pages.
//!
//! Everything here is a pure function over already-fetched records.
//! Amounts are summed as floats without price conversion, so numbers across
//! different assets are only indicative.

use std::collections::BTreeMap;

use crate::models::{
    analytics::{AssetCount, AssetShare, TransactionPoint, VolumePoint},
    horizon::{Balance, PaymentRecord},
    payment::{Direction, PaymentStatus, PaymentSummary},
};

fn parse_amount(amount: &str) -> f64 {
    amount
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Holdings breakdown with each balance's share of the total.
pub fn asset_distribution(balances: &[Balance]) -> Vec<AssetShare> {
    let values: Vec<f64> = balances.iter().map(|b| parse_amount(&b.balance)).collect();
    let total: f64 = values.iter().sum();

    balances
        .iter()
        .zip(values)
        .map(|(balance, value)| AssetShare {
            code: balance.display_code().to_string(),
            balance: balance.balance.clone(),
            value,
            percentage: if total > 0.0 {
                value / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Flatten payments into dated points, in the order given.
pub fn transaction_history(payments: &[PaymentRecord]) -> Vec<TransactionPoint> {
    payments
        .iter()
        .map(|p| TransactionPoint {
            date: p.created_at.format("%Y-%m-%d").to_string(),
            amount: parse_amount(p.effective_amount()),
            asset: p.asset_label().to_string(),
        })
        .collect()
}

/// Per-day volume, oldest day first.
pub fn daily_volume(history: &[TransactionPoint]) -> Vec<VolumePoint> {
    let mut by_date: BTreeMap<&str, f64> = BTreeMap::new();
    for point in history {
        *by_date.entry(point.date.as_str()).or_insert(0.0) += point.amount;
    }

    by_date
        .into_iter()
        .map(|(date, volume)| VolumePoint {
            date: date.to_string(),
            volume,
        })
        .collect()
}

pub fn transaction_counts(history: &[TransactionPoint]) -> Vec<AssetCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for point in history {
        *counts.entry(point.asset.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(asset, count)| AssetCount {
            asset: asset.to_string(),
            count,
        })
        .collect()
}

/// stellar.expert network segment for a Horizon base URL.
pub fn explorer_network(horizon_url: &str) -> &'static str {
    if horizon_url.contains("testnet") {
        "testnet"
    } else {
        "public"
    }
}

/// Reshape a payment record into a table row as seen from `viewer`.
pub fn summarize_payment(record: &PaymentRecord, viewer: &str, network: &str) -> PaymentSummary {
    let to = record.receiver().unwrap_or("Unknown").to_string();
    let direction = if to == viewer {
        Direction::Incoming
    } else {
        Direction::Outgoing
    };

    PaymentSummary {
        id: record.id.clone(),
        created_at: record.created_at,
        amount: record.effective_amount().to_string(),
        asset: record.asset_label().to_string(),
        from: record.sender().unwrap_or("Unknown").to_string(),
        to,
        direction,
        status: if record.transaction_successful {
            PaymentStatus::Success
        } else {
            PaymentStatus::Failed
        },
        operation_type: record.operation_type.clone(),
        transaction_hash: record.transaction_hash.clone(),
        explorer_url: format!(
            "https://stellar.expert/explorer/{network}/tx/{}",
            record.transaction_hash
        ),
    }
}

/// Case-insensitive search over the fields shown in the payments table.
pub fn matches_search(record: &PaymentRecord, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    [
        Some(record.id.as_str()),
        Some(record.effective_amount()),
        Some(record.asset_label()),
        record.sender(),
        record.receiver(),
        Some(record.transaction_hash.as_str()),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    const ME: &str = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";
    const THEM: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";

    fn balance(asset_type: &str, code: Option<&str>, amount: &str) -> Balance {
        Balance {
            balance: amount.to_string(),
            asset_type: asset_type.to_string(),
            asset_code: code.map(str::to_string),
            asset_issuer: None,
            limit: None,
            extra: Map::new(),
        }
    }

    fn payment(created_at: &str, amount: &str, code: Option<&str>, from: &str, to: &str) -> PaymentRecord {
        serde_json::from_value(serde_json::json!({
            "id": format!("op-{created_at}-{amount}"),
            "paging_token": "1",
            "type": "payment",
            "created_at": created_at,
            "transaction_hash": "deadbeef",
            "transaction_successful": true,
            "source_account": from,
            "asset_type": if code.is_some() { "credit_alphanum4" } else { "native" },
            "asset_code": code,
            "from": from,
            "to": to,
            "amount": amount,
        }))
        .unwrap()
    }

    #[test]
    fn distribution_percentages_sum_to_hundred() {
        let shares = asset_distribution(&[
            balance("native", None, "75.0000000"),
            balance("credit_alphanum4", Some("USDC"), "25.0000000"),
        ]);

        assert_eq!(shares[0].code, "XLM");
        assert_eq!(shares[0].percentage, 75.0);
        assert_eq!(shares[1].code, "USDC");
        assert_eq!(shares[1].percentage, 25.0);
    }

    #[test]
    fn zero_total_gives_zero_percentages() {
        let shares = asset_distribution(&[
            balance("native", None, "0.0000000"),
            balance("liquidity_pool_shares", None, "0"),
        ]);

        assert!(shares.iter().all(|s| s.percentage == 0.0));
        assert_eq!(shares[1].code, "Unknown");
    }

    #[test]
    fn volume_is_grouped_by_day_and_sorted() {
        let payments = vec![
            payment("2024-03-02T09:00:00Z", "5", None, THEM, ME),
            payment("2024-03-01T23:59:59Z", "1.5", Some("USDC"), ME, THEM),
            payment("2024-03-02T18:30:00Z", "2.5", None, ME, THEM),
        ];

        let history = transaction_history(&payments);
        assert_eq!(history[1].date, "2024-03-01");
        assert_eq!(history[1].asset, "USDC");

        let volume = daily_volume(&history);
        assert_eq!(
            volume,
            vec![
                VolumePoint { date: "2024-03-01".to_string(), volume: 1.5 },
                VolumePoint { date: "2024-03-02".to_string(), volume: 7.5 },
            ]
        );

        let counts = transaction_counts(&history);
        assert_eq!(
            counts,
            vec![
                AssetCount { asset: "USDC".to_string(), count: 1 },
                AssetCount { asset: "XLM".to_string(), count: 2 },
            ]
        );
    }

    #[test]
    fn unparsable_amount_counts_as_zero() {
        let mut record = payment("2024-03-01T00:00:00Z", "x", None, THEM, ME);
        record.amount = Some("not-a-number".to_string());
        assert_eq!(transaction_history(&[record])[0].amount, 0.0);
    }

    #[test]
    fn summary_direction_depends_on_viewer() {
        let incoming = summarize_payment(&payment("2024-03-01T00:00:00Z", "3", None, THEM, ME), ME, "public");
        assert_eq!(incoming.direction, Direction::Incoming);
        assert_eq!(incoming.status, PaymentStatus::Success);
        assert_eq!(
            incoming.explorer_url,
            "https://stellar.expert/explorer/public/tx/deadbeef"
        );

        let outgoing = summarize_payment(&payment("2024-03-01T00:00:00Z", "3", None, ME, THEM), ME, "public");
        assert_eq!(outgoing.direction, Direction::Outgoing);
    }

    #[test]
    fn search_is_case_insensitive() {
        let record = payment("2024-03-01T00:00:00Z", "42.5", Some("USDC"), THEM, ME);

        assert!(matches_search(&record, "usdc"));
        assert!(matches_search(&record, "42.5"));
        assert!(matches_search(&record, &THEM[..8].to_lowercase()));
        assert!(matches_search(&record, "  "));
        assert!(!matches_search(&record, "btc"));
    }

    #[test]
    fn testnet_horizon_maps_to_testnet_explorer() {
        assert_eq!(explorer_network("https://horizon-testnet.stellar.org"), "testnet");
        assert_eq!(explorer_network("https://horizon.stellar.org"), "public");
    }
}
