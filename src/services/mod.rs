//! Business logic services.
//!
//! Services wrap the upstream APIs and hold the pure reshaping logic,
//! separated from HTTP handlers.

pub mod analytics_service;
pub mod horizon_service;
pub mod payment_request_service;
pub mod signing_service;
