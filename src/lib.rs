//! # Widget Board
//!
//! A dashboard builder served over HTTP. The operator adds widget cards to
//! a canvas, fills them from a category sidebar, removes individual entries
//! or whole widgets, and saves the canvas to durable local storage so it is
//! restored on the next start.
//!
//! ## Features
//!
//! - **Category catalog**: loaded once from an HTTP URL or a local file
//! - **Stable identities**: widgets and entries are addressed by id, never
//!   by rendered position
//! - **Durable saves**: atomic file-backed key-value store
//! - **No-script page**: every control is a plain form post
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog types and sources
//! - [`board`]: Widgets, selection indexes and the registry
//! - [`render`]: HTML markup for cards, sidebar and page
//! - [`persistence`]: Key-value stores and the saved-widget adapter
//! - [`controller`]: Sidebar and widget-surface event handling
//! - [`dashboard`]: The session aggregate tying it all together
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use widgetboard::board::SelectionKind;
//! use widgetboard::dashboard::Dashboard;
//! use widgetboard::persistence::{MemoryStore, PersistenceAdapter, DEFAULT_STORAGE_KEY};
//! use std::sync::Arc;
//!
//! let persistence = PersistenceAdapter::new(Arc::new(MemoryStore::new()), DEFAULT_STORAGE_KEY);
//! let mut dashboard = Dashboard::bootstrap(persistence, false);
//!
//! let widget = dashboard.add_widget();
//! dashboard.change_selection(SelectionKind::Ticket, "INC-7", true).unwrap();
//! dashboard.save().unwrap();
//!
//! println!("{}", dashboard.render_card(widget).unwrap());
//! ```

pub mod api;
pub mod board;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod persistence;
pub mod render;

// Re-export top-level types for convenience
pub use board::{
    BoardError, BoardResult, EntryId, SelectionIndex, SelectionKind, Widget, WidgetId,
    WidgetRegistry,
};

pub use catalog::{source_for, Catalog, CatalogItem, CatalogLoadError, CatalogSource, Category};

pub use persistence::{
    FileStore, KeyValueStore, MemoryStore, PersistedWidget, PersistenceAdapter, StoreError,
};

pub use controller::{ControllerError, SidebarController, WidgetSurfaceController};

pub use dashboard::Dashboard;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, ConfigOrigin, LoggingConfig};
