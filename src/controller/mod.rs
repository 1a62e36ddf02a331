//! UI Controllers
//!
//! Translate operator events into registry mutations:
//!
//! - **sidebar**: tabs, checkboxes, visibility
//! - **surface**: widget cards, removal, save and restore

pub mod error;
pub mod sidebar;
pub mod surface;

pub use error::{ControllerError, ControllerResult};
pub use sidebar::{SelectionChange, SidebarController};
pub use surface::{WidgetRemoval, WidgetSurfaceController};
