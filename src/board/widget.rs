//! Widget types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::selection::SelectionIndex;

/// Stable widget identifier.
///
/// Assigned from a monotonic sequence when the widget is created and never
/// reassigned, so removing one widget leaves every other id untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(pub u64);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a widget displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetContent {
    /// Rendered from the widget's selection index
    Live,
    /// Markup restored from storage, replayed verbatim for display only
    Snapshot(String),
}

/// A user-created card aggregating selected items
#[derive(Debug, Clone)]
pub struct Widget {
    id: WidgetId,
    selection: SelectionIndex,
    content: WidgetContent,
}

impl Widget {
    /// A new, empty live widget
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            selection: SelectionIndex::new(),
            content: WidgetContent::Live,
        }
    }

    /// A live widget with an existing selection
    pub fn with_selection(id: WidgetId, selection: SelectionIndex) -> Self {
        Self {
            id,
            selection,
            content: WidgetContent::Live,
        }
    }

    /// A display-only widget replaying stored markup
    pub fn from_markup(id: WidgetId, markup: impl Into<String>) -> Self {
        Self {
            id,
            selection: SelectionIndex::new(),
            content: WidgetContent::Snapshot(markup.into()),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn content(&self) -> &WidgetContent {
        &self.content
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self.content, WidgetContent::Snapshot(_))
    }

    pub fn selection(&self) -> &SelectionIndex {
        &self.selection
    }

    /// Mutable selection, or `None` for snapshot widgets which have no
    /// structured selection to edit
    pub fn selection_mut(&mut self) -> Option<&mut SelectionIndex> {
        match self.content {
            WidgetContent::Live => Some(&mut self.selection),
            WidgetContent::Snapshot(_) => None,
        }
    }
}
