//! Markup Rendering
//!
//! String-templated HTML for the dashboard page:
//!
//! - **card**: widget cards and their persisted content
//! - **sidebar**: category tabs and checkbox panes
//! - **page**: the full document
//! - **html**: escaping

pub mod card;
pub mod html;
pub mod page;
pub mod sidebar;

pub use card::{persisted_content, render_widget_card, render_widget_content, ItemControls};
pub use html::escape;
pub use page::{render_page, PageView};
pub use sidebar::{pane_entries, pane_id, render_sidebar, PaneEntry, PaneLabel};
