//! Catalog data types
//!
//! The catalog is deserialized verbatim from the category source and is
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Full category catalog as returned by the source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

/// A named group of selectable items with an associated image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Image reference shown in the Images pane
    pub graph: String,
    #[serde(default)]
    pub widgets: Vec<CatalogItem>,
}

/// A selectable item inside a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub text: String,
}

impl Catalog {
    /// Parse a catalog from its JSON representation
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Every item across all categories, in catalog order
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.categories.iter().flat_map(|c| c.widgets.iter())
    }

    /// Total number of items across all categories
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.widgets.len()).sum()
    }
}
