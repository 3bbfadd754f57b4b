//! Payment request (QR code) HTTP handlers.
//!
//! - POST /api/payment-request - Build a `web+stellar:pay` link
//! - POST /api/payment-request/qr - Same link rendered as an SVG QR code

use crate::{
    error::AppError,
    extract::JsonBody,
    models::payment::{PaymentRequestInput, PaymentRequestResponse},
    services::payment_request_service::{create_payment_request, render_qr_svg},
};
use axum::{
    Json,
    http::header,
    response::IntoResponse,
};

/// Create a payment request link.
///
/// # Request Body
///
/// ```json
/// {
///   "destinationAddress": "G...",
///   "amount": "25",
///   "assetCode": "USDC",
///   "memo": "Invoice 1001"
/// }
/// ```
///
/// # Response (200)
///
/// The generated link plus the echoed inputs, see [`PaymentRequestResponse`].
pub async fn create_request(
    JsonBody(input): JsonBody<PaymentRequestInput>,
) -> Result<Json<PaymentRequestResponse>, AppError> {
    let request = create_payment_request(input)?;

    tracing::info!(
        payment_id = %request.payment_id,
        asset = %request.asset_code,
        "Payment request created"
    );

    Ok(Json(request))
}

/// Create a payment request and return it as `image/svg+xml`.
///
/// The generated link is repeated in the `X-Payment-Url` header.
pub async fn create_request_qr(
    JsonBody(input): JsonBody<PaymentRequestInput>,
) -> Result<impl IntoResponse, AppError> {
    let request = create_payment_request(input)?;
    let svg = render_qr_svg(&request.payment_url)?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml".to_string()),
            (
                header::HeaderName::from_static("x-payment-url"),
                request.payment_url,
            ),
        ],
        svg,
    ))
}
