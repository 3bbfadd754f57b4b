//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (query string, JSON body)
//! 2. Calls Horizon or the signing service
//! 3. Returns the reshaped JSON response
/// Account lookup endpoints
pub mod accounts;
/// Analytics and dashboard endpoints
pub mod analytics;
/// Common asset catalogue
pub mod assets;
/// Service health endpoint
pub mod health;
/// Keypair generation proxy
pub mod keypairs;
/// Payment request links and QR codes
pub mod payment_requests;
/// Payment history and sending
pub mod payments;
/// Trustline listing and creation
pub mod trustlines;
