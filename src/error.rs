//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message shown for accounts that Horizon does not know about.
pub const ACCOUNT_NOT_FOUND_MESSAGE: &str =
    "Account not found. It has not been activated on the network yet.";

/// Application-wide error type.
///
/// Every handler returns `Result<_, AppError>`. Upstream failures are not
/// retried; their messages reach the UI verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request parameters or body are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Request body is not valid JSON for the expected shape.
    ///
    /// Returns the rejection's status (400, 415 or 422).
    #[error("{}", .0.body_text())]
    InvalidJson(#[from] JsonRejection),

    /// Query string could not be deserialized.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),

    /// Bearer key is missing or does not match the configured hash.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Horizon answered 404 for the account.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found. It has not been activated on the network yet.")]
    AccountNotFound,

    /// Horizon or the signing service answered with a non-success status.
    ///
    /// Returns HTTP 502 Bad Gateway.
    #[error("{service} error (status {status}): {message}")]
    Upstream {
        service: &'static str,
        status: u16,
        message: String,
    },

    /// The upstream could not be reached or its body could not be decoded.
    ///
    /// Returns HTTP 502 Bad Gateway.
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The signing service answered but reported `success: false`.
    ///
    /// Returns HTTP 502 Bad Gateway.
    #[error("{0}")]
    SigningRejected(String),

    /// No signing service URL is configured.
    ///
    /// Returns HTTP 503 Service Unavailable.
    #[error("Signing service is not configured")]
    SigningNotConfigured,

    /// The payment URI could not be encoded as a QR code.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Failed to render QR code: {0}")]
    QrCode(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "success": false,
///   "code": "error_type",
///   "error": "Human-readable error message"
/// }
/// ```
///
/// Missing accounts additionally carry `"exists": false` so the dashboard
/// can tell them apart from transport failures.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            AppError::InvalidJson(rejection) => (rejection.status(), "invalid_request"),
            AppError::InvalidQuery(rejection) => (rejection.status(), "invalid_request"),
            AppError::InvalidApiKey => (StatusCode::UNAUTHORIZED, "invalid_api_key"),
            AppError::AccountNotFound => (StatusCode::NOT_FOUND, "account_not_found"),
            AppError::Upstream { .. } => (StatusCode::BAD_GATEWAY, "upstream_error"),
            AppError::Http(_) => (StatusCode::BAD_GATEWAY, "upstream_unreachable"),
            AppError::SigningRejected(_) => (StatusCode::BAD_GATEWAY, "signing_rejected"),
            AppError::SigningNotConfigured => {
                (StatusCode::SERVICE_UNAVAILABLE, "signing_unavailable")
            }
            AppError::QrCode(_) => (StatusCode::INTERNAL_SERVER_ERROR, "qr_error"),
        };

        let mut body = json!({
            "success": false,
            "code": code,
            "error": self.to_string(),
        });

        if matches!(self, AppError::AccountNotFound) {
            body["exists"] = json!(false);
        }

        (status, Json(body)).into_response()
    }
}

/// Shorthand for a missing required parameter.
pub fn missing(field: &str) -> AppError {
    AppError::InvalidRequest(format!("{field} is required"))
}
