//! Catalog Route
//!
//! - GET /api/v1/catalog - The loaded category catalog

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalog::Catalog;

/// GET /api/v1/catalog
///
/// 404 until the background load has installed a catalog.
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> ApiResult<Json<Catalog>> {
    state
        .dashboard
        .read()
        .await
        .catalog()
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("catalog not loaded".to_string()))
}
