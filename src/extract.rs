//! Request extractors whose rejections render as `AppError` JSON bodies.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query},
};

use crate::error::AppError;

/// `Json<T>` with malformed bodies reported as `invalid_request`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `Query<T>` with unparsable query strings reported as `invalid_request`.
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
