//! Sidebar Routes
//!
//! - POST /api/v1/selection - One checkbox change, routed to the active widget
//! - POST /api/v1/tabs/:category - Switch the active category tab
//! - POST /api/v1/sidebar/visibility - Show or hide the sidebar
//! - GET /api/v1/sidebar - Render the sidebar

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    SelectionRequest, SelectionResponse, SidebarResponse, TabResponse, VisibilityRequest,
};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::board::SelectionKind;
use crate::dashboard::Dashboard;
use crate::render::pane_id;

/// POST /api/v1/selection
///
/// Changes aimed at a display-only widget return `applied: false`.
pub async fn change_selection(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectionRequest>,
) -> ApiResult<Json<SelectionResponse>> {
    let mut dashboard = state.dashboard.write().await;
    let change = dashboard.change_selection(request.category, &request.value, request.checked)?;

    tracing::debug!(
        widget = %change.widget,
        category = %request.category,
        checked = request.checked,
        applied = change.applied,
        "Selection changed"
    );

    Ok(Json(SelectionResponse {
        widget_id: change.widget,
        applied: change.applied,
        card: dashboard.render_card(change.widget)?,
    }))
}

/// POST /api/v1/tabs/:category
pub async fn activate_tab(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> ApiResult<Json<TabResponse>> {
    let kind: SelectionKind = category.parse()?;
    state.dashboard.write().await.activate_tab(kind);

    Ok(Json(TabResponse {
        active: kind,
        pane: pane_id(kind),
    }))
}

/// POST /api/v1/sidebar/visibility
pub async fn set_visibility(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VisibilityRequest>,
) -> Json<SidebarResponse> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.set_sidebar_visible(request.visible);
    Json(sidebar_response(&dashboard))
}

/// GET /api/v1/sidebar
pub async fn get_sidebar(State(state): State<Arc<AppState>>) -> Json<SidebarResponse> {
    let dashboard = state.dashboard.read().await;
    Json(sidebar_response(&dashboard))
}

fn sidebar_response(dashboard: &Dashboard) -> SidebarResponse {
    SidebarResponse {
        visible: dashboard.sidebar().is_visible(),
        active: dashboard.sidebar().active_tab(),
        html: dashboard.render_sidebar(),
    }
}
