//! HTTP middleware components.
//!
//! Middleware run before route handlers and can short-circuit requests.

/// Optional API key guard
pub mod auth;
