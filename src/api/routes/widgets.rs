//! Widget Routes
//!
//! - GET /api/v1/widgets - List widgets
//! - POST /api/v1/widgets - Add an empty widget
//! - GET /api/v1/widgets/:id - Get a widget's card
//! - DELETE /api/v1/widgets/:id - Remove a widget (persists immediately)
//! - POST /api/v1/widgets/:id/focus - Make a widget the selection target
//! - DELETE /api/v1/widgets/:id/items/:entry - Remove one selected entry

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CardResponse, RemoveWidgetResponse, WidgetListResponse, WidgetSummary};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::board::{EntryId, WidgetId};

/// GET /api/v1/widgets
pub async fn list_widgets(State(state): State<Arc<AppState>>) -> Json<WidgetListResponse> {
    let dashboard = state.dashboard.read().await;
    let registry = dashboard.registry();
    let active = registry.active_id();

    let widgets: Vec<WidgetSummary> = registry
        .iter()
        .enumerate()
        .map(|(position, widget)| WidgetSummary::new(widget, position, active == Some(widget.id())))
        .collect();

    Json(WidgetListResponse {
        total: widgets.len(),
        widgets,
        active,
        last_saved: dashboard.last_saved(),
    })
}

/// POST /api/v1/widgets
pub async fn add_widget(
    State(state): State<Arc<AppState>>,
) -> ApiResult<(StatusCode, Json<CardResponse>)> {
    let mut dashboard = state.dashboard.write().await;
    let id = dashboard.add_widget();
    let card = dashboard.render_card(id)?;

    Ok((
        StatusCode::CREATED,
        Json(CardResponse {
            widget_id: id,
            card,
        }),
    ))
}

/// GET /api/v1/widgets/:id
pub async fn get_widget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<CardResponse>> {
    let id = WidgetId(id);
    let card = state.dashboard.read().await.render_card(id)?;

    Ok(Json(CardResponse {
        widget_id: id,
        card,
    }))
}

/// DELETE /api/v1/widgets/:id
pub async fn remove_widget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<RemoveWidgetResponse>> {
    let removal = state.dashboard.write().await.remove_widget(WidgetId(id))?;

    Ok(Json(RemoveWidgetResponse {
        removed: removal.widget,
        persisted: removal.persisted,
    }))
}

/// POST /api/v1/widgets/:id/focus
pub async fn focus_widget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<CardResponse>> {
    let id = WidgetId(id);
    let mut dashboard = state.dashboard.write().await;
    dashboard.focus_widget(id)?;

    Ok(Json(CardResponse {
        widget_id: id,
        card: dashboard.render_card(id)?,
    }))
}

/// DELETE /api/v1/widgets/:id/items/:entry
///
/// Returns the widget's re-rendered card.
pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    Path((id, entry)): Path<(u64, u64)>,
) -> ApiResult<Json<CardResponse>> {
    let id = WidgetId(id);
    let card = state
        .dashboard
        .write()
        .await
        .remove_item(id, EntryId(entry))?;

    Ok(Json(CardResponse {
        widget_id: id,
        card,
    }))
}
