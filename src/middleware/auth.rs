//! API key guard for routes that forward secrets to the signing service.
//!
//! When `API_KEY_SHA256` is configured, every guarded request must carry
//! `Authorization: Bearer <key>` whose SHA-256 matches it. Without the
//! setting the guard lets everything through.

use crate::{error::AppError, state::AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of a bearer key.
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare without short-circuiting on the first differing byte.
fn digests_match(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Skip the check if no key hash is configured
/// 2. Extract `Authorization: Bearer <key>`
/// 3. Hash the key and compare against the configured hash
/// 4. Reject with 401 on mismatch, otherwise call the next handler
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.api_key_hash.as_deref() else {
        return Ok(next.run(request).await);
    };

    let api_key = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AppError::InvalidApiKey)?;

    if !digests_match(&hash_api_key(api_key), expected) {
        tracing::warn!(path = %request.uri().path(), "Rejected request with invalid API key");
        return Err(AppError::InvalidApiKey);
    }

    Ok(next.run(request).await)
}
