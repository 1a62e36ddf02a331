//! Page Form Routes
//!
//! Targets of the forms embedded in the rendered page. Each applies one
//! event and redirects back to `/` with 303 See Other.
//!
//! - POST /ui/widgets - Add widget
//! - POST /ui/widgets/:id/remove - Remove widget
//! - POST /ui/widgets/:id/focus - Focus widget
//! - POST /ui/widgets/:id/items/:entry/remove - Remove one entry
//! - POST /ui/panes/:category - Submit a pane's checkboxes
//! - POST /ui/tabs/:category - Switch tab
//! - POST /ui/save - Save
//! - POST /ui/sidebar/show, /ui/sidebar/hide - Sidebar visibility

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::board::{BoardError, EntryId, SelectionKind, WidgetId};

fn back() -> Redirect {
    Redirect::to("/")
}

/// POST /ui/widgets
pub async fn add_widget(State(state): State<Arc<AppState>>) -> Redirect {
    state.dashboard.write().await.add_widget();
    back()
}

/// POST /ui/widgets/:id/remove
pub async fn remove_widget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Redirect> {
    state.dashboard.write().await.remove_widget(WidgetId(id))?;
    Ok(back())
}

/// POST /ui/widgets/:id/focus
pub async fn focus_widget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Redirect> {
    state.dashboard.write().await.focus_widget(WidgetId(id))?;
    Ok(back())
}

/// POST /ui/widgets/:id/items/:entry/remove
pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    Path((id, entry)): Path<(u64, u64)>,
) -> ApiResult<Redirect> {
    state
        .dashboard
        .write()
        .await
        .remove_item(WidgetId(id), EntryId(entry))?;
    Ok(back())
}

/// POST /ui/panes/:category
///
/// Checked boxes arrive as `item-{position}` fields. A submission with no
/// widget on the page is logged and dropped.
pub async fn submit_pane(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> ApiResult<Redirect> {
    let kind: SelectionKind = category.parse()?;
    let submitted = checked_values(fields);

    let mut dashboard = state.dashboard.write().await;
    dashboard.activate_tab(kind);

    match dashboard.submit_pane(kind, &submitted) {
        Ok(_) => Ok(back()),
        Err(BoardError::NoActiveWidget) => {
            tracing::warn!(category = %kind, "Pane submitted with no widget to receive it");
            Ok(back())
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /ui/tabs/:category
pub async fn activate_tab(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> ApiResult<Redirect> {
    let kind: SelectionKind = category.parse()?;
    state.dashboard.write().await.activate_tab(kind);
    Ok(back())
}

/// POST /ui/save
pub async fn save(State(state): State<Arc<AppState>>) -> ApiResult<Redirect> {
    state.dashboard.write().await.save()?;
    Ok(back())
}

/// POST /ui/sidebar/show
pub async fn show_sidebar(State(state): State<Arc<AppState>>) -> Redirect {
    state.dashboard.write().await.set_sidebar_visible(true);
    back()
}

/// POST /ui/sidebar/hide
pub async fn hide_sidebar(State(state): State<Arc<AppState>>) -> Redirect {
    state.dashboard.write().await.set_sidebar_visible(false);
    back()
}

fn checked_values(fields: HashMap<String, String>) -> Vec<String> {
    fields
        .into_iter()
        .filter(|(key, _)| key.starts_with("item-"))
        .map(|(_, value)| value)
        .collect()
}
