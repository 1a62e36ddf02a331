//! Dashboard Session
//!
//! The aggregate behind one running dashboard: catalog snapshot, widget
//! registry, sidebar state and persistence. Every UI event is one method
//! call here, executed synchronously.
//!
//! # Startup
//!
//! ```text
//! restore saved widgets → page servable → catalog load (spawned) → sidebar renders
//! ```

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::board::{BoardResult, EntryId, SelectionKind, WidgetId, WidgetRegistry};
use crate::catalog::{Catalog, CatalogSource};
use crate::controller::{
    ControllerResult, SelectionChange, SidebarController, WidgetRemoval, WidgetSurfaceController,
};
use crate::persistence::{PersistenceAdapter, StoreResult};
use crate::render::{render_page, PageView};

/// One dashboard session
#[derive(Debug)]
pub struct Dashboard {
    catalog: Option<Catalog>,
    registry: WidgetRegistry,
    sidebar: SidebarController,
    surface: WidgetSurfaceController,
    persistence: PersistenceAdapter,
    last_saved: Option<DateTime<Utc>>,
}

impl Dashboard {
    /// Create an empty dashboard without touching storage
    pub fn new(persistence: PersistenceAdapter, restore_editable: bool) -> Self {
        Self {
            catalog: None,
            registry: WidgetRegistry::new(),
            sidebar: SidebarController::new(),
            surface: WidgetSurfaceController::new(restore_editable),
            persistence,
            last_saved: None,
        }
    }

    /// Create a dashboard and restore previously saved widgets
    pub fn bootstrap(persistence: PersistenceAdapter, restore_editable: bool) -> Self {
        let mut dashboard = Self::new(persistence, restore_editable);
        let restored = dashboard.restore();
        tracing::info!(restored, "Dashboard ready");
        dashboard
    }

    /// Materialize saved widgets; returns how many were restored
    pub fn restore(&mut self) -> usize {
        self.surface.restore(&mut self.registry, &self.persistence)
    }

    /// Install the loaded catalog. It is kept for the process lifetime.
    pub fn install_catalog(&mut self, catalog: Catalog) {
        if self.catalog.is_some() {
            tracing::warn!("Catalog already installed; ignoring reload");
            return;
        }
        tracing::info!(
            categories = catalog.categories.len(),
            items = catalog.item_count(),
            "Catalog installed"
        );
        self.catalog = Some(catalog);
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    pub fn sidebar(&self) -> &SidebarController {
        &self.sidebar
    }

    pub fn persistence(&self) -> &PersistenceAdapter {
        &self.persistence
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    // ============================================
    // EVENTS
    // ============================================

    pub fn add_widget(&mut self) -> WidgetId {
        self.surface.add_widget(&mut self.registry, &mut self.sidebar)
    }

    pub fn focus_widget(&mut self, id: WidgetId) -> ControllerResult<()> {
        self.surface.focus_widget(&mut self.registry, id)
    }

    pub fn activate_tab(&mut self, kind: SelectionKind) {
        self.sidebar.activate_tab(kind);
    }

    pub fn set_sidebar_visible(&mut self, visible: bool) {
        if visible {
            self.sidebar.show();
        } else {
            self.sidebar.hide();
        }
    }

    /// One checkbox change, routed to the active widget
    pub fn change_selection(
        &mut self,
        kind: SelectionKind,
        value: &str,
        checked: bool,
    ) -> BoardResult<SelectionChange> {
        self.sidebar
            .on_change(&mut self.registry, kind, value, checked)
    }

    /// A whole pane submitted from the page
    pub fn submit_pane(
        &mut self,
        kind: SelectionKind,
        submitted: &[String],
    ) -> BoardResult<Option<WidgetId>> {
        self.sidebar
            .submit_pane(&mut self.registry, self.catalog.as_ref(), kind, submitted)
    }

    pub fn remove_item(&mut self, widget: WidgetId, entry: EntryId) -> ControllerResult<String> {
        self.surface.remove_item(&mut self.registry, widget, entry)
    }

    pub fn remove_widget(&mut self, widget: WidgetId) -> ControllerResult<WidgetRemoval> {
        self.surface
            .remove_widget(&mut self.registry, &self.persistence, widget)
    }

    pub fn save(&mut self) -> StoreResult<usize> {
        let saved = self.surface.save(&mut self.registry, &self.persistence)?;
        self.last_saved = Some(Utc::now());
        Ok(saved)
    }

    // ============================================
    // RENDERING
    // ============================================

    pub fn render_card(&self, widget: WidgetId) -> ControllerResult<String> {
        self.surface.render_widget_card(&self.registry, widget)
    }

    pub fn render_sidebar(&self) -> String {
        self.sidebar.render(self.catalog.as_ref())
    }

    pub fn render_surface(&self) -> String {
        self.surface.render_surface(&self.registry)
    }

    pub fn render_page(&self) -> String {
        let sidebar = self.render_sidebar();
        let surface = self.render_surface();
        render_page(&PageView {
            sidebar: &sidebar,
            sidebar_visible: self.sidebar.is_visible(),
            surface: &surface,
        })
    }
}

/// Load the catalog once and install it into the shared dashboard.
///
/// A failure is logged and terminal: the sidebar stays empty and there is
/// no retry. Returns whether a catalog was installed.
pub async fn load_catalog(dashboard: Arc<RwLock<Dashboard>>, source: Box<dyn CatalogSource>) -> bool {
    tracing::info!(source = %source.location(), "Loading catalog");

    match source.load().await {
        Ok(catalog) => {
            dashboard.write().await.install_catalog(catalog);
            true
        }
        Err(e) => {
            tracing::error!(source = %source.location(), error = %e, "Failed to load catalog");
            false
        }
    }
}
