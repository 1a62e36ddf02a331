//! Widget Persistence
//!
//! - **store**: `KeyValueStore` trait with file and in-memory backends
//! - **adapter**: `PersistenceAdapter`, saved-widget snapshot and restore
//! - **error**: `StoreError`, `StorageParseError`

pub mod adapter;
pub mod error;
pub mod store;

pub use adapter::{PersistedWidget, PersistenceAdapter, DEFAULT_STORAGE_KEY};
pub use error::{StorageParseError, StoreError, StoreResult};
pub use store::{FileStore, KeyValueStore, MemoryStore};
