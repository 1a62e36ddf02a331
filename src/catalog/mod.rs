//! Category Catalog
//!
//! Loads the static catalog of categories and their selectable items.
//! The catalog is read once at startup and is read-only afterwards.
//!
//! - **types**: `Catalog`, `Category`, `CatalogItem`
//! - **source**: `CatalogSource` trait with HTTP and file implementations
//! - **error**: `CatalogLoadError`

pub mod error;
pub mod source;
pub mod types;

pub use error::{CatalogLoadError, CatalogResult};
pub use source::{source_for, CatalogSource, FileCatalogSource, HttpCatalogSource};
pub use types::{Catalog, CatalogItem, Category};
