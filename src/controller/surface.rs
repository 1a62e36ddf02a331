//! Widget Surface Controller
//!
//! Routes widget-level events (add, focus, remove item, remove widget,
//! save, restore) into the registry and the persistence adapter.

use crate::board::{BoardError, EntryId, SelectionIndex, Widget, WidgetId, WidgetRegistry};
use crate::persistence::{PersistenceAdapter, StoreResult};
use crate::render::render_widget_card;

use super::error::{ControllerError, ControllerResult};
use super::sidebar::SidebarController;

/// Outcome of removing a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetRemoval {
    pub widget: WidgetId,
    /// Number of widgets written to storage after the removal
    pub persisted: usize,
}

/// Widget canvas controller
#[derive(Debug, Clone, Default)]
pub struct WidgetSurfaceController {
    /// Restore widgets with a stored selection as live, editable widgets
    restore_editable: bool,
}

impl WidgetSurfaceController {
    pub fn new(restore_editable: bool) -> Self {
        Self { restore_editable }
    }

    /// Create an empty widget, make it active and reset sidebar checkmarks
    pub fn add_widget(
        &self,
        registry: &mut WidgetRegistry,
        sidebar: &mut SidebarController,
    ) -> WidgetId {
        let id = registry.create();
        sidebar.reset_checkmarks();

        tracing::info!(widget_id = %id, widgets = registry.len(), "Added widget");
        id
    }

    /// Make a widget the target of sidebar selections
    pub fn focus_widget(&self, registry: &mut WidgetRegistry, id: WidgetId) -> ControllerResult<()> {
        registry.focus(id)?;
        tracing::debug!(widget_id = %id, "Focused widget");
        Ok(())
    }

    /// Card markup for one widget
    pub fn render_widget_card(&self, registry: &WidgetRegistry, id: WidgetId) -> ControllerResult<String> {
        let widget = registry
            .get(id)
            .ok_or(BoardError::WidgetNotFound(id))?;
        Ok(render_widget_card(widget, registry.active_id() == Some(id)))
    }

    /// Every card, in registry order
    pub fn render_surface(&self, registry: &WidgetRegistry) -> String {
        let active = registry.active_id();
        registry
            .iter()
            .map(|widget| render_widget_card(widget, active == Some(widget.id())))
            .collect()
    }

    /// Delete one entry and return the widget's re-rendered card.
    ///
    /// Only in-memory state changes; storage is updated on the next save.
    pub fn remove_item(
        &self,
        registry: &mut WidgetRegistry,
        id: WidgetId,
        entry: EntryId,
    ) -> ControllerResult<String> {
        let widget = registry
            .get_mut(id)
            .ok_or(BoardError::WidgetNotFound(id))?;

        let selection = widget
            .selection_mut()
            .ok_or(BoardError::EntryNotFound(entry))?;
        let (kind, removed) = selection.remove_entry(entry)?;

        tracing::debug!(
            widget_id = %id,
            entry_id = %entry,
            category = %kind,
            value = %removed.value,
            "Removed selection entry"
        );

        self.render_widget_card(registry, id)
    }

    /// Remove a widget and persist the remaining ones immediately
    pub fn remove_widget(
        &self,
        registry: &mut WidgetRegistry,
        persistence: &PersistenceAdapter,
        id: WidgetId,
    ) -> ControllerResult<WidgetRemoval> {
        registry.remove(id)?;
        tracing::info!(widget_id = %id, widgets = registry.len(), "Removed widget");

        let persisted = persistence.save(registry).map_err(ControllerError::Store)?;
        Ok(WidgetRemoval {
            widget: id,
            persisted,
        })
    }

    /// Persist every widget, then lock all saved entries so their
    /// removal controls disappear
    pub fn save(&self, registry: &mut WidgetRegistry, persistence: &PersistenceAdapter) -> StoreResult<usize> {
        let saved = persistence.save(registry)?;

        let locked: usize = registry
            .iter_mut()
            .filter_map(|widget| widget.selection_mut())
            .map(SelectionIndex::lock_all)
            .sum();
        tracing::debug!(locked, "Stripped item removal controls");

        Ok(saved)
    }

    /// Materialize every saved widget into the registry.
    ///
    /// Returns the number of widgets restored.
    pub fn restore(&self, registry: &mut WidgetRegistry, persistence: &PersistenceAdapter) -> usize {
        let saved = persistence.restore();
        let count = saved.len();

        for entry in saved {
            match (self.restore_editable, entry.selection) {
                (true, Some(snapshot)) => {
                    let selection = SelectionIndex::from_snapshot(&snapshot, true);
                    registry.insert_with(|id| Widget::with_selection(id, selection));
                }
                _ => {
                    registry.insert_with(|id| Widget::from_markup(id, entry.content));
                }
            }
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SelectionKind;
    use crate::persistence::{MemoryStore, DEFAULT_STORAGE_KEY};
    use crate::render::{persisted_content, render_widget_content, ItemControls};
    use std::sync::Arc;

    fn adapter() -> PersistenceAdapter {
        PersistenceAdapter::new(Arc::new(MemoryStore::new()), DEFAULT_STORAGE_KEY)
    }

    fn select(registry: &mut WidgetRegistry, id: WidgetId, kind: SelectionKind, value: &str) -> EntryId {
        registry
            .get_mut(id)
            .unwrap()
            .selection_mut()
            .unwrap()
            .add(kind, value)
            .unwrap()
    }

    #[test]
    fn test_add_widget_resets_checkmarks_only() {
        let surface = WidgetSurfaceController::default();
        let mut registry = WidgetRegistry::new();
        let mut sidebar = SidebarController::new();

        let first = surface.add_widget(&mut registry, &mut sidebar);
        sidebar
            .on_change(&mut registry, SelectionKind::Cspm, "W1", true)
            .unwrap();

        let second = surface.add_widget(&mut registry, &mut sidebar);
        assert_ne!(first, second);
        assert_eq!(registry.active_id(), Some(second));
        assert!(!sidebar.is_checked(SelectionKind::Cspm, "W1"));
        assert_eq!(registry.get(first).unwrap().selection().len(), 1);
        assert!(registry.get(second).unwrap().selection().is_empty());
    }

    #[test]
    fn test_remove_item_leaves_other_entries() {
        let surface = WidgetSurfaceController::default();
        let mut registry = WidgetRegistry::new();
        let id = registry.create();

        select(&mut registry, id, SelectionKind::Cspm, "a");
        let b = select(&mut registry, id, SelectionKind::Cspm, "b");
        select(&mut registry, id, SelectionKind::Cspm, "c");
        select(&mut registry, id, SelectionKind::Ticket, "T1");

        let card = surface.remove_item(&mut registry, id, b).unwrap();
        assert!(!card.contains("<span>b</span>"));

        let selection = registry.get(id).unwrap().selection();
        assert_eq!(selection.values(SelectionKind::Cspm), vec!["a", "c"]);
        assert_eq!(selection.values(SelectionKind::Ticket), vec!["T1"]);
    }

    #[test]
    fn test_remove_item_out_of_order_uses_stable_ids() {
        let surface = WidgetSurfaceController::default();
        let mut registry = WidgetRegistry::new();
        let id = registry.create();

        let a = select(&mut registry, id, SelectionKind::Cspm, "a");
        let b = select(&mut registry, id, SelectionKind::Cspm, "b");
        let c = select(&mut registry, id, SelectionKind::Cspm, "c");

        surface.remove_item(&mut registry, id, a).unwrap();
        surface.remove_item(&mut registry, id, c).unwrap();

        let selection = registry.get(id).unwrap().selection();
        assert_eq!(selection.values(SelectionKind::Cspm), vec!["b"]);
        assert!(selection.find(b).is_some());
    }

    #[test]
    fn test_remove_widget_persists_immediately() {
        let surface = WidgetSurfaceController::default();
        let persistence = adapter();
        let mut registry = WidgetRegistry::new();

        let keep = registry.create();
        select(&mut registry, keep, SelectionKind::Cspm, "keep");
        let gone = registry.create();
        select(&mut registry, gone, SelectionKind::Cspm, "drop");

        let removal = surface.remove_widget(&mut registry, &persistence, gone).unwrap();
        assert_eq!(removal.persisted, 1);

        let saved = persistence.load().unwrap();
        assert_eq!(saved.len(), registry.len());
        assert!(saved.iter().all(|w| !w.content.contains("drop")));
        assert!(saved[0].content.contains("keep"));
    }

    #[test]
    fn test_remove_missing_widget() {
        let surface = WidgetSurfaceController::default();
        let mut registry = WidgetRegistry::new();

        let err = surface
            .remove_widget(&mut registry, &adapter(), WidgetId(7))
            .unwrap_err();
        assert!(matches!(
            err,
            ControllerError::Board(BoardError::WidgetNotFound(WidgetId(7)))
        ));
    }

    #[test]
    fn test_save_strips_item_controls() {
        let surface = WidgetSurfaceController::default();
        let persistence = adapter();
        let mut registry = WidgetRegistry::new();
        let id = registry.create();
        let saved_entry = select(&mut registry, id, SelectionKind::Ticket, "T1");

        assert!(surface.render_widget_card(&registry, id).unwrap().contains("remove-item"));
        assert_eq!(surface.save(&mut registry, &persistence).unwrap(), 1);
        assert!(!surface.render_widget_card(&registry, id).unwrap().contains("remove-item"));

        let err = surface.remove_item(&mut registry, id, saved_entry).unwrap_err();
        assert!(matches!(err, ControllerError::Board(BoardError::EntryLocked(_))));

        // Entries added after the save get their control back
        select(&mut registry, id, SelectionKind::Ticket, "T2");
        let card = surface.render_widget_card(&registry, id).unwrap();
        assert_eq!(card.matches("class=\"remove-item\"").count(), 1);
    }

    #[test]
    fn test_save_then_restore_is_byte_identical() {
        let surface = WidgetSurfaceController::default();
        let persistence = adapter();
        let mut registry = WidgetRegistry::new();

        let a = registry.create();
        select(&mut registry, a, SelectionKind::Cspm, "W1");
        select(&mut registry, a, SelectionKind::Images, "g.png");
        let b = registry.create();
        select(&mut registry, b, SelectionKind::Ticket, "T1");

        surface.save(&mut registry, &persistence).unwrap();
        let saved: Vec<String> = registry.iter().map(persisted_content).collect();

        let mut reloaded = WidgetRegistry::new();
        assert_eq!(surface.restore(&mut reloaded, &persistence), 2);

        let restored: Vec<String> = reloaded
            .iter()
            .map(|w| render_widget_content(w, ItemControls::Shown))
            .collect();
        assert_eq!(restored, saved);
        assert!(reloaded.iter().all(|w| w.is_snapshot()));

        let surface_html = surface.render_surface(&reloaded);
        assert!(!surface_html.contains("remove-item"));
        assert_eq!(surface_html.matches("class=\"remove-widget\"").count(), 2);
    }

    #[test]
    fn test_restore_editable_rebuilds_selection() {
        let surface = WidgetSurfaceController::new(true);
        let persistence = adapter();
        let mut registry = WidgetRegistry::new();
        let id = registry.create();
        select(&mut registry, id, SelectionKind::Cspm, "W1");
        surface.save(&mut registry, &persistence).unwrap();
        let saved = persisted_content(registry.get(id).unwrap());

        let mut reloaded = WidgetRegistry::new();
        surface.restore(&mut reloaded, &persistence);

        let widget = reloaded.get_by_position(0).unwrap();
        assert!(!widget.is_snapshot());
        assert_eq!(widget.selection().values(SelectionKind::Cspm), vec!["W1"]);
        assert_eq!(render_widget_content(widget, ItemControls::Shown), saved);
    }
}
