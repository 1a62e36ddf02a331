//! Persistence Adapter
//!
//! Snapshots the registry's visible content into a single JSON value and
//! reads it back at startup.
//!
//! # Stored format
//!
//! ```text
//! [
//!   { "content": "<div class=\"widget-child\">...</div>",
//!     "selection": { "CSPM": [...], "Images": [...], "Ticket": [...] } }
//! ]
//! ```
//!
//! `selection` is optional on read, so plain `[{ "content": ... }]` values
//! restore as well.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::board::{SelectionSnapshot, WidgetContent, WidgetRegistry};
use crate::render::persisted_content;

use super::error::{StorageParseError, StoreResult};
use super::store::KeyValueStore;

/// Default storage key
pub const DEFAULT_STORAGE_KEY: &str = "savedWidgets";

/// One saved widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedWidget {
    /// Rendered content without per-item removal controls
    pub content: String,
    /// Structured selection, absent for widgets that were themselves restored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionSnapshot>,
}

/// Reads and writes the saved widget list under one key
#[derive(Clone)]
pub struct PersistenceAdapter {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl PersistenceAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Snapshot every live widget in registry order
    pub fn snapshot(registry: &WidgetRegistry) -> Vec<PersistedWidget> {
        registry
            .iter()
            .map(|widget| PersistedWidget {
                content: persisted_content(widget),
                selection: match widget.content() {
                    WidgetContent::Live => Some(widget.selection().snapshot()),
                    WidgetContent::Snapshot(_) => None,
                },
            })
            .collect()
    }

    /// Overwrite the stored list with the current registry.
    ///
    /// Returns the number of widgets written.
    pub fn save(&self, registry: &WidgetRegistry) -> StoreResult<usize> {
        let saved = Self::snapshot(registry);
        let encoded = serde_json::to_string(&saved)?;
        self.store.set(&self.key, &encoded)?;

        tracing::info!(key = %self.key, widgets = saved.len(), "Saved widgets");
        Ok(saved.len())
    }

    /// Read the stored list, reporting why nothing could be restored
    pub fn load(&self) -> Result<Vec<PersistedWidget>, StorageParseError> {
        let raw = self
            .store
            .get(&self.key)
            .map_err(|e| StorageParseError::Unreadable {
                key: self.key.clone(),
                error: e.to_string(),
            })?
            .ok_or_else(|| StorageParseError::Absent(self.key.clone()))?;

        serde_json::from_str(&raw).map_err(|e| StorageParseError::Malformed {
            key: self.key.clone(),
            error: e.to_string(),
        })
    }

    /// Read the stored list; absent or malformed data yields an empty list
    pub fn restore(&self) -> Vec<PersistedWidget> {
        match self.load() {
            Ok(saved) => {
                tracing::info!(key = %self.key, widgets = saved.len(), "Restored saved widgets");
                saved
            }
            Err(e @ StorageParseError::Absent(_)) => {
                tracing::debug!("{}", e);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("{}; starting with no saved widgets", e);
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
