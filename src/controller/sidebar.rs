//! Sidebar Controller
//!
//! Owns the sidebar's UI state (active tab, checkmarks, visibility) and
//! routes checkbox events into the active widget's selection index.

use std::collections::HashSet;

use crate::board::{BoardError, BoardResult, SelectionKind, WidgetId, WidgetRegistry};
use crate::catalog::Catalog;
use crate::render::{pane_entries, render_sidebar};

/// Result of routing one checkbox event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// Widget that was targeted, to be re-rendered
    pub widget: WidgetId,
    /// False when the target was a display-only snapshot widget
    pub applied: bool,
}

/// Sidebar UI state
#[derive(Debug)]
pub struct SidebarController {
    active_tab: SelectionKind,
    checked: HashSet<(SelectionKind, String)>,
    visible: bool,
}

impl Default for SidebarController {
    fn default() -> Self {
        Self {
            active_tab: SelectionKind::Cspm,
            checked: HashSet::new(),
            visible: true,
        }
    }
}

impl SidebarController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabs and panes for the given catalog
    pub fn render(&self, catalog: Option<&Catalog>) -> String {
        render_sidebar(catalog, self.active_tab, |kind, value| {
            self.is_checked(kind, value)
        })
    }

    /// Deactivate every pane, then activate the one for `kind`
    pub fn activate_tab(&mut self, kind: SelectionKind) {
        self.active_tab = kind;
        tracing::debug!(category = %kind, "Activated sidebar tab");
    }

    pub fn active_tab(&self) -> SelectionKind {
        self.active_tab
    }

    pub fn is_checked(&self, kind: SelectionKind, value: &str) -> bool {
        self.checked.contains(&(kind, value.to_string()))
    }

    /// Clear every checkmark. Widget selections are left untouched.
    pub fn reset_checkmarks(&mut self) {
        self.checked.clear();
    }

    /// Route a single checkbox change to the active widget.
    ///
    /// A check appends the value unless already present; an uncheck removes
    /// every occurrence of it.
    pub fn on_change(
        &mut self,
        registry: &mut WidgetRegistry,
        kind: SelectionKind,
        value: &str,
        checked: bool,
    ) -> BoardResult<SelectionChange> {
        let widget = registry.active_mut().ok_or(BoardError::NoActiveWidget)?;
        let widget_id = widget.id();

        if checked {
            self.checked.insert((kind, value.to_string()));
        } else {
            self.checked.remove(&(kind, value.to_string()));
        }

        let Some(selection) = widget.selection_mut() else {
            tracing::debug!(
                widget_id = %widget_id,
                category = %kind,
                "Ignoring selection change for restored widget"
            );
            return Ok(SelectionChange {
                widget: widget_id,
                applied: false,
            });
        };

        if checked {
            selection.add(kind, value);
        } else {
            let removed = selection.remove_value(kind, value);
            tracing::debug!(widget_id = %widget_id, category = %kind, removed, "Unchecked value");
        }

        Ok(SelectionChange {
            widget: widget_id,
            applied: true,
        })
    }

    /// Apply a whole-pane form submission.
    ///
    /// Diffs the submitted values against the current checkmarks for `kind`
    /// and routes one change per difference, in catalog order. Returns the
    /// targeted widget when anything changed.
    pub fn submit_pane(
        &mut self,
        registry: &mut WidgetRegistry,
        catalog: Option<&Catalog>,
        kind: SelectionKind,
        submitted: &[String],
    ) -> BoardResult<Option<WidgetId>> {
        let Some(catalog) = catalog else {
            return Ok(None);
        };

        let wanted: HashSet<&str> = submitted.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();
        let mut target = None;

        for entry in pane_entries(catalog, kind) {
            if !seen.insert(entry.value.clone()) {
                continue;
            }

            let want = wanted.contains(entry.value.as_str());
            if want != self.is_checked(kind, &entry.value) {
                let change = self.on_change(registry, kind, &entry.value, want)?;
                target = Some(change.widget);
            }
        }

        Ok(target)
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Widget;

    fn sample_catalog() -> Catalog {
        Catalog::from_json(
            r#"{"categories":[
                {"name":"A","graph":"a.png","widgets":[{"name":"W1","text":"T1"},{"name":"W2","text":"T2"}]},
                {"name":"B","graph":"b.png","widgets":[{"name":"W3","text":"T3"}]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_check_twice_adds_once() {
        let mut sidebar = SidebarController::new();
        let mut registry = WidgetRegistry::new();
        let id = registry.create();

        sidebar
            .on_change(&mut registry, SelectionKind::Cspm, "W1", true)
            .unwrap();
        sidebar
            .on_change(&mut registry, SelectionKind::Cspm, "W1", true)
            .unwrap();

        let widget = registry.get(id).unwrap();
        assert_eq!(widget.selection().values(SelectionKind::Cspm), vec!["W1"]);
        assert!(sidebar.is_checked(SelectionKind::Cspm, "W1"));
    }

    #[test]
    fn test_uncheck_removes_every_occurrence() {
        let mut sidebar = SidebarController::new();
        let mut registry = WidgetRegistry::new();
        let id = registry.create();
        {
            let selection = registry.get_mut(id).unwrap().selection_mut().unwrap();
            selection.push(SelectionKind::Ticket, "T1");
            selection.push(SelectionKind::Ticket, "T1");
            selection.push(SelectionKind::Ticket, "T2");
        }

        sidebar
            .on_change(&mut registry, SelectionKind::Ticket, "T1", false)
            .unwrap();

        let widget = registry.get(id).unwrap();
        assert_eq!(widget.selection().values(SelectionKind::Ticket), vec!["T2"]);
    }

    #[test]
    fn test_changes_target_active_widget() {
        let mut sidebar = SidebarController::new();
        let mut registry = WidgetRegistry::new();
        let first = registry.create();
        let second = registry.create();

        let change = sidebar
            .on_change(&mut registry, SelectionKind::Images, "a.png", true)
            .unwrap();
        assert_eq!(change.widget, second);

        registry.focus(first).unwrap();
        sidebar
            .on_change(&mut registry, SelectionKind::Images, "b.png", true)
            .unwrap();

        assert_eq!(
            registry.get(first).unwrap().selection().values(SelectionKind::Images),
            vec!["b.png"]
        );
        assert_eq!(
            registry.get(second).unwrap().selection().values(SelectionKind::Images),
            vec!["a.png"]
        );
    }

    #[test]
    fn test_change_without_widget_fails() {
        let mut sidebar = SidebarController::new();
        let mut registry = WidgetRegistry::new();

        let err = sidebar
            .on_change(&mut registry, SelectionKind::Cspm, "W1", true)
            .unwrap_err();
        assert_eq!(err, BoardError::NoActiveWidget);
        assert!(!sidebar.is_checked(SelectionKind::Cspm, "W1"));
    }

    #[test]
    fn test_change_on_snapshot_widget_is_ignored() {
        let mut sidebar = SidebarController::new();
        let mut registry = WidgetRegistry::new();
        registry.insert_with(|id| Widget::from_markup(id, "<span>saved</span>"));

        let change = sidebar
            .on_change(&mut registry, SelectionKind::Cspm, "W1", true)
            .unwrap();
        assert!(!change.applied);
    }

    #[test]
    fn test_single_active_tab() {
        let catalog = sample_catalog();
        let mut sidebar = SidebarController::new();

        let html = sidebar.render(Some(&catalog));
        assert_eq!(html.matches("widget-content active").count(), 1);
        assert!(html.contains("class=\"widget-content active\" id=\"category-0\""));

        sidebar.activate_tab(SelectionKind::Images);
        let html = sidebar.render(Some(&catalog));
        assert_eq!(html.matches("widget-content active").count(), 1);
        assert!(html.contains("class=\"widget-content active\" id=\"category-1\""));
        assert!(html.contains("class=\"widget-content\" id=\"category-0\""));
    }

    #[test]
    fn test_submit_pane_diffs_checkmarks() {
        let catalog = sample_catalog();
        let mut sidebar = SidebarController::new();
        let mut registry = WidgetRegistry::new();
        let id = registry.create();

        let target = sidebar
            .submit_pane(
                &mut registry,
                Some(&catalog),
                SelectionKind::Cspm,
                &["W3".to_string(), "W1".to_string()],
            )
            .unwrap();
        assert_eq!(target, Some(id));
        assert_eq!(
            registry.get(id).unwrap().selection().values(SelectionKind::Cspm),
            vec!["W1", "W3"]
        );

        sidebar
            .submit_pane(
                &mut registry,
                Some(&catalog),
                SelectionKind::Cspm,
                &["W3".to_string(), "W2".to_string()],
            )
            .unwrap();
        assert_eq!(
            registry.get(id).unwrap().selection().values(SelectionKind::Cspm),
            vec!["W3", "W2"]
        );

        // Resubmitting the same state changes nothing
        let target = sidebar
            .submit_pane(
                &mut registry,
                Some(&catalog),
                SelectionKind::Cspm,
                &["W3".to_string(), "W2".to_string()],
            )
            .unwrap();
        assert_eq!(target, None);
    }

    #[test]
    fn test_reset_keeps_selection() {
        let mut sidebar = SidebarController::new();
        let mut registry = WidgetRegistry::new();
        let id = registry.create();

        sidebar
            .on_change(&mut registry, SelectionKind::Ticket, "T1", true)
            .unwrap();
        sidebar.reset_checkmarks();

        assert!(!sidebar.is_checked(SelectionKind::Ticket, "T1"));
        assert_eq!(registry.get(id).unwrap().selection().len(), 1);
    }

    #[test]
    fn test_visibility() {
        let mut sidebar = SidebarController::new();
        assert!(sidebar.is_visible());
        sidebar.hide();
        assert!(!sidebar.is_visible());
        sidebar.show();
        assert!(sidebar.is_visible());
    }
}
