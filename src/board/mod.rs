//! Widget Board
//!
//! In-memory model of the dashboard canvas:
//!
//! - **selection**: `SelectionIndex`, category → ordered entries
//! - **widget**: `Widget` and its stable `WidgetId`
//! - **registry**: `WidgetRegistry` with active-widget tracking
//! - **error**: `BoardError`

pub mod error;
pub mod registry;
pub mod selection;
pub mod widget;

pub use error::{BoardError, BoardResult};
pub use registry::WidgetRegistry;
pub use selection::{EntryId, SelectionEntry, SelectionIndex, SelectionKind, SelectionSnapshot};
pub use widget::{Widget, WidgetContent, WidgetId};
