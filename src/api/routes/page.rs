//! Page Route
//!
//! - GET / - The full dashboard document

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.dashboard.read().await.render_page())
}
