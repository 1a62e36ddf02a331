//! Save Route
//!
//! - POST /api/v1/save - Persist every widget's content

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::SaveResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /api/v1/save
///
/// Entries present at save time lose their removal controls.
pub async fn save(State(state): State<Arc<AppState>>) -> ApiResult<Json<SaveResponse>> {
    let mut dashboard = state.dashboard.write().await;
    let saved = dashboard.save()?;

    Ok(Json(SaveResponse {
        saved,
        saved_at: dashboard.last_saved(),
    }))
}
