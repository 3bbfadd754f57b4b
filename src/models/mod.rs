//! Data models.
//!
//! Upstream Horizon shapes plus the request/response bodies of this API.

/// Account query and response bodies
pub mod account;
/// Analytics report shapes
pub mod analytics;
/// Common asset catalogue
pub mod asset;
/// Horizon account and payment records
pub mod horizon;
/// Payment, payment request and payment summary bodies
pub mod payment;
/// Trustline request body
pub mod trustline;
