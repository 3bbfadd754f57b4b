//! Common asset catalogue endpoint.

use axum::Json;
use serde::Serialize;

use crate::models::asset::{CommonAsset, common_assets};

#[derive(Debug, Serialize)]
pub struct AssetsResponse {
    pub success: bool,
    pub assets: &'static [CommonAsset],
}

/// `GET /api/assets`
pub async fn list_assets() -> Json<AssetsResponse> {
    Json(AssetsResponse {
        success: true,
        assets: common_assets(),
    })
}
