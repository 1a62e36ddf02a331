//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::{SelectionKind, SelectionSnapshot, Widget, WidgetId};

// ============================================
// WIDGET DTOs
// ============================================

/// Summary of one widget
#[derive(Debug, Serialize)]
pub struct WidgetSummary {
    pub id: WidgetId,
    /// Current position in registry order
    pub position: usize,
    /// Whether sidebar selections go to this widget
    pub active: bool,
    /// Restored, display-only widget
    pub snapshot: bool,
    /// Number of selected entries
    pub entries: usize,
    /// Structured selection, absent for snapshot widgets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionSnapshot>,
}

impl WidgetSummary {
    pub fn new(widget: &Widget, position: usize, active: bool) -> Self {
        let snapshot = widget.is_snapshot();
        Self {
            id: widget.id(),
            position,
            active,
            snapshot,
            entries: widget.selection().len(),
            selection: (!snapshot).then(|| widget.selection().snapshot()),
        }
    }
}

/// Widget list response
#[derive(Debug, Serialize)]
pub struct WidgetListResponse {
    pub widgets: Vec<WidgetSummary>,
    pub total: usize,
    /// Widget receiving sidebar selections
    pub active: Option<WidgetId>,
    /// Time of the last explicit save in this session
    pub last_saved: Option<DateTime<Utc>>,
}

/// A widget's rendered card
#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub widget_id: WidgetId,
    pub card: String,
}

/// Widget removal response
#[derive(Debug, Serialize)]
pub struct RemoveWidgetResponse {
    pub removed: WidgetId,
    /// Widgets written to storage after the removal
    pub persisted: usize,
}

// ============================================
// SIDEBAR DTOs
// ============================================

/// Checkbox change request
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub category: SelectionKind,
    pub value: String,
    pub checked: bool,
}

/// Checkbox change response with the targeted widget's card
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub widget_id: WidgetId,
    /// False when the target was a display-only widget
    pub applied: bool,
    pub card: String,
}

/// Active tab response
#[derive(Debug, Serialize)]
pub struct TabResponse {
    pub active: SelectionKind,
    pub pane: String,
}

/// Sidebar visibility request
#[derive(Debug, Deserialize)]
pub struct VisibilityRequest {
    pub visible: bool,
}

/// Sidebar state response
#[derive(Debug, Serialize)]
pub struct SidebarResponse {
    pub visible: bool,
    pub active: SelectionKind,
    pub html: String,
}

// ============================================
// SAVE DTOs
// ============================================

/// Save response
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    /// Number of widgets written
    pub saved: usize,
    pub saved_at: Option<DateTime<Utc>>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" once the catalog is loaded, "degraded" before
    pub status: String,
    /// "loaded" or "missing"
    pub catalog: String,
    pub widgets: usize,
    pub uptime_seconds: u64,
    pub started_at: DateTime<Utc>,
    pub version: String,
}
