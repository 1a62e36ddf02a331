//! Board error types

use thiserror::Error;

use super::selection::EntryId;
use super::widget::WidgetId;

/// Errors raised by widget and selection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No live widget has this id
    #[error("Widget not found: {0}")]
    WidgetNotFound(WidgetId),

    /// No entry with this id in the widget's selection
    #[error("Selection entry not found: {0}")]
    EntryNotFound(EntryId),

    /// Entry was saved and no longer has a removal control
    #[error("Selection entry {0} was saved and cannot be removed individually")]
    EntryLocked(EntryId),

    /// A selection change arrived while no widget exists
    #[error("No active widget to receive the selection")]
    NoActiveWidget,

    /// Category name outside the fixed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::WidgetNotFound(WidgetId(3));
        assert_eq!(err.to_string(), "Widget not found: 3");

        let err = BoardError::UnknownCategory("Charts".to_string());
        assert_eq!(err.to_string(), "Unknown category: Charts");
    }
}
