//! Widget Registry
//!
//! Ordered collection of live widgets plus the explicit active-widget
//! reference used to route sidebar selections.

use super::error::{BoardError, BoardResult};
use super::widget::{Widget, WidgetId};

/// Registry of live widgets, in creation order
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    widgets: Vec<Widget>,
    /// Next id to hand out; never decreases
    next_id: u64,
    /// Explicitly focused widget, if any
    active: Option<WidgetId>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create an empty live widget and make it the active one
    pub fn create(&mut self) -> WidgetId {
        let id = self.allocate_id();
        self.widgets.push(Widget::new(id));
        self.active = Some(id);
        id
    }

    /// Register a widget built by `build` with the next id.
    ///
    /// The active reference is left alone, so restored widgets become the
    /// implicit target only through the most-recently-added rule.
    pub fn insert_with(&mut self, build: impl FnOnce(WidgetId) -> Widget) -> WidgetId {
        let id = self.allocate_id();
        let widget = build(id);
        debug_assert_eq!(widget.id(), id);
        self.widgets.push(widget);
        id
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id() == id)
    }

    /// Lookup by current position in registry order
    pub fn get_by_position(&self, position: usize) -> Option<&Widget> {
        self.widgets.get(position)
    }

    pub fn position_of(&self, id: WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| w.id() == id)
    }

    /// Remove a widget by id, clearing it as the active widget if needed
    pub fn remove(&mut self, id: WidgetId) -> BoardResult<Widget> {
        let position = self
            .position_of(id)
            .ok_or(BoardError::WidgetNotFound(id))?;

        if self.active == Some(id) {
            self.active = None;
        }

        Ok(self.widgets.remove(position))
    }

    /// Mark a widget as the explicit active widget
    pub fn focus(&mut self, id: WidgetId) -> BoardResult<()> {
        if self.get(id).is_none() {
            return Err(BoardError::WidgetNotFound(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// The widget that receives sidebar selections.
    ///
    /// The explicit reference wins; otherwise the most recently added
    /// widget is the implicit target.
    pub fn active_id(&self) -> Option<WidgetId> {
        self.active.or_else(|| self.widgets.last().map(|w| w.id()))
    }

    pub fn active_mut(&mut self) -> Option<&mut Widget> {
        let id = self.active_id()?;
        self.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Widget> {
        self.widgets.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut registry = WidgetRegistry::new();
        let a = registry.create();
        let b = registry.create();

        assert_eq!(a, WidgetId(0));
        assert_eq!(b, WidgetId(1));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_by_position(1).unwrap().id(), b);
    }

    #[test]
    fn test_remove_keeps_other_ids_stable() {
        let mut registry = WidgetRegistry::new();
        let a = registry.create();
        let b = registry.create();
        let c = registry.create();

        registry.remove(b).unwrap();

        assert!(registry.get(a).is_some());
        assert!(registry.get(c).is_some());
        assert_eq!(registry.position_of(c), Some(1));

        // Removed ids are never handed out again
        let d = registry.create();
        assert_eq!(d, WidgetId(3));
    }

    #[test]
    fn test_remove_unknown_widget() {
        let mut registry = WidgetRegistry::new();
        assert_eq!(
            registry.remove(WidgetId(9)).unwrap_err(),
            BoardError::WidgetNotFound(WidgetId(9))
        );
    }

    #[test]
    fn test_active_defaults_to_most_recent() {
        let mut registry = WidgetRegistry::new();
        assert_eq!(registry.active_id(), None);

        let a = registry.create();
        let b = registry.create();
        assert_eq!(registry.active_id(), Some(b));

        registry.focus(a).unwrap();
        assert_eq!(registry.active_id(), Some(a));

        // Removing the focused widget falls back to the implicit target
        registry.remove(a).unwrap();
        assert_eq!(registry.active_id(), Some(b));
    }

    #[test]
    fn test_insert_with_does_not_steal_focus() {
        let mut registry = WidgetRegistry::new();
        let a = registry.create();
        registry.insert_with(|id| Widget::from_markup(id, "<span>x</span>"));

        assert_eq!(registry.active_id(), Some(a));
    }

    #[test]
    fn test_focus_unknown_widget() {
        let mut registry = WidgetRegistry::new();
        assert!(registry.focus(WidgetId(0)).is_err());
    }
}
