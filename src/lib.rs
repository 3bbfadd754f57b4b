//! Stellar Merchant Tool - backend service
//!
//! JSON API behind the merchant dashboard: account balances, payment
//! history, analytics, payment-request QR codes and trustline management.
//! Ledger data comes from Horizon; keys and signatures come from an external
//! signing service. Nothing is stored locally.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the HTTP router.
///
/// Routes that forward secrets (payments, trustlines, keypairs) sit behind
/// the optional API key guard; read-only routes are public.
pub fn build_app(state: AppState) -> Router {
    // Guard for routes forwarding secrets to the signing service
    let guard = axum_middleware::from_fn_with_state(state.clone(), middleware::auth::require_api_key);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Account routes
        .route("/api/account", get(handlers::accounts::get_account))
        .route("/api/account/check", get(handlers::accounts::check_account))
        .route("/api/account/balance", get(handlers::accounts::get_balance))
        .route(
            "/api/keypair",
            get(handlers::keypairs::create_keypair).route_layer(guard.clone()),
        )
        // Payment routes
        .route("/api/payments", get(handlers::payments::list_payments))
        .route(
            "/api/payment",
            post(handlers::payments::send_payment).route_layer(guard.clone()),
        )
        .route(
            "/api/payment-request",
            post(handlers::payment_requests::create_request),
        )
        .route(
            "/api/payment-request/qr",
            post(handlers::payment_requests::create_request_qr),
        )
        // Asset and trustline routes
        .route("/api/assets", get(handlers::assets::list_assets))
        .route(
            "/api/trustlines",
            get(handlers::trustlines::list_trustlines)
                .merge(post(handlers::trustlines::create_trustline).route_layer(guard.clone())),
        )
        .route(
            "/api/trustline",
            post(handlers::trustlines::create_trustline).route_layer(guard),
        )
        // Aggregated views
        .route("/api/analytics", get(handlers::analytics::get_analytics))
        .route("/api/dashboard", get(handlers::analytics::get_dashboard))
        .layer(CorsLayer::permissive())
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
