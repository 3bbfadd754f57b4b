//! Payment request links (SEP-7) and their QR codes.
//!
//! A payment request is a `web+stellar:pay` URI that wallets understand.
//! Nothing is stored or sent to the network; the merchant shares the link
//! or QR code and the payer's wallet builds the transaction.

use chrono::Utc;
use qrcode::{QrCode, render::svg};
use url::form_urlencoded;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        asset::find_common_asset,
        payment::{PaymentRequestInput, PaymentRequestResponse},
    },
    services::horizon_service::is_valid_public_key,
};

const PAY_URI_PREFIX: &str = "web+stellar:pay";

/// Stellar amounts carry at most seven decimal places.
const MAX_DECIMALS: usize = 7;

/// Memo text is limited to 28 bytes on the ledger.
const MAX_MEMO_BYTES: usize = 28;

/// Check that `amount` is a positive decimal with at most seven decimals.
pub fn validate_amount(amount: &str) -> Result<(), AppError> {
    let invalid = || AppError::InvalidRequest("Please enter a valid positive amount".to_string());

    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !digits_only(whole) || !digits_only(fraction) || fraction.len() > MAX_DECIMALS {
        return Err(invalid());
    }
    if !amount.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        return Err(invalid());
    }
    Ok(())
}

/// Build the `web+stellar:pay` URI.
///
/// # Format
///
/// `web+stellar:pay?destination=G...&amount=10[&asset_code=USDC[&asset_issuer=G...]][&memo=...]`
///
/// `asset_code`/`asset_issuer` are omitted for XLM. Values are
/// form-urlencoded.
pub fn payment_uri(
    destination: &str,
    amount: &str,
    asset_code: &str,
    asset_issuer: Option<&str>,
    memo: &str,
) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("destination", destination);
    query.append_pair("amount", amount);

    if asset_code != "XLM" {
        query.append_pair("asset_code", asset_code);
        if let Some(issuer) = asset_issuer {
            query.append_pair("asset_issuer", issuer);
        }
    }

    if !memo.is_empty() {
        query.append_pair("memo", memo);
    }

    format!("{PAY_URI_PREFIX}?{}", query.finish())
}

/// Validate a payment request and build its link.
///
/// For non-XLM assets without an explicit issuer, the issuer of the matching
/// common asset is filled in when there is one.
pub fn create_payment_request(
    input: PaymentRequestInput,
) -> Result<PaymentRequestResponse, AppError> {
    if input.destination_address.is_empty() || input.amount.is_empty() {
        return Err(AppError::InvalidRequest(
            "Missing required parameters".to_string(),
        ));
    }
    if !is_valid_public_key(&input.destination_address) {
        return Err(AppError::InvalidRequest(
            "Invalid Stellar address format".to_string(),
        ));
    }
    validate_amount(&input.amount)?;

    let memo = input.memo.trim().to_string();
    if memo.len() > MAX_MEMO_BYTES {
        return Err(AppError::InvalidRequest(format!(
            "Memo must be at most {MAX_MEMO_BYTES} bytes"
        )));
    }

    let asset_code = if input.asset_code.is_empty() {
        "XLM".to_string()
    } else {
        input.asset_code
    };

    let asset_issuer = match input.asset_issuer.filter(|i| !i.is_empty()) {
        Some(issuer) if asset_code != "XLM" => {
            if !is_valid_public_key(&issuer) {
                return Err(AppError::InvalidRequest(
                    "Invalid asset issuer format".to_string(),
                ));
            }
            Some(issuer)
        }
        Some(_) => None,
        None => find_common_asset(&asset_code)
            .and_then(|a| a.issuer)
            .map(str::to_string),
    };

    let payment_url = payment_uri(
        &input.destination_address,
        &input.amount,
        &asset_code,
        asset_issuer.as_deref(),
        &memo,
    );

    Ok(PaymentRequestResponse {
        success: true,
        payment_id: format!("pay_{}", Uuid::new_v4().simple()),
        payment_url,
        destination_address: input.destination_address,
        amount: input.amount,
        asset_code,
        asset_issuer,
        memo,
        timestamp: Utc::now(),
    })
}

/// Render `data` as an SVG QR code.
pub fn render_qr_svg(data: &str) -> Result<String, AppError> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| AppError::QrCode(e.to_string()))?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(256, 256)
        .quiet_zone(true)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEST: &str = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";
    const USDC_ISSUER: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";

    fn input(amount: &str, asset_code: &str, memo: &str) -> PaymentRequestInput {
        PaymentRequestInput {
            destination_address: DEST.to_string(),
            amount: amount.to_string(),
            asset_code: asset_code.to_string(),
            asset_issuer: None,
            memo: memo.to_string(),
        }
    }

    #[test]
    fn xlm_uri_has_only_destination_and_amount() {
        let response = create_payment_request(input("10", "XLM", "")).unwrap();

        assert_eq!(
            response.payment_url,
            format!("web+stellar:pay?destination={DEST}&amount=10")
        );
        assert!(response.payment_id.starts_with("pay_"));
        assert_eq!(response.asset_issuer, None);
    }

    #[test]
    fn common_asset_issuer_is_filled_in() {
        let response = create_payment_request(input("2.5", "USDC", "")).unwrap();

        assert_eq!(response.asset_issuer.as_deref(), Some(USDC_ISSUER));
        assert!(
            response
                .payment_url
                .ends_with(&format!("&asset_code=USDC&asset_issuer={USDC_ISSUER}"))
        );
    }

    #[test]
    fn unknown_asset_without_issuer_has_code_only() {
        let response = create_payment_request(input("1", "ZZZ", "")).unwrap();
        assert!(response.payment_url.ends_with("&asset_code=ZZZ"));
    }

    #[test]
    fn memo_is_encoded() {
        let response = create_payment_request(input("1", "XLM", "Order #42")).unwrap();
        assert!(response.payment_url.ends_with("&memo=Order+%2342"));
        assert_eq!(response.memo, "Order #42");
    }

    #[test]
    fn long_memo_is_rejected() {
        let memo = "x".repeat(29);
        assert!(create_payment_request(input("1", "XLM", &memo)).is_err());
    }

    #[test]
    fn bad_destination_is_rejected() {
        let mut req = input("1", "XLM", "");
        req.destination_address = "GNOTAKEY".to_string();
        let err = create_payment_request(req).unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(msg) if msg == "Invalid Stellar address format"));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = create_payment_request(input("", "XLM", "")).unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(msg) if msg == "Missing required parameters"));
    }

    #[test]
    fn amount_rules() {
        for ok in ["1", "0.0000001", "12.5", "100.", ".5"] {
            assert!(validate_amount(ok).is_ok(), "{ok}");
        }
        for bad in ["0", "0.000", "-1", "1e5", "abc", ".", "1.23456789", "1,5", " 1"] {
            assert!(validate_amount(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn qr_svg_is_rendered() {
        let svg = render_qr_svg(&payment_uri(DEST, "10", "XLM", None, "")).unwrap();
        assert!(svg.contains("<svg"));
    }
}
