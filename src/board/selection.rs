//! Selection Index
//!
//! Per-widget mapping of category to the ordered list of chosen values.
//! Every entry carries an identifier that is unique within its widget and
//! never reused, so removals address entries directly instead of by
//! their rendered position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{BoardError, BoardResult};

/// The fixed sidebar categories, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SelectionKind {
    #[serde(rename = "CSPM")]
    Cspm,
    #[serde(rename = "Images")]
    Images,
    #[serde(rename = "Ticket")]
    Ticket,
}

impl SelectionKind {
    /// All kinds in their fixed order
    pub const ALL: [SelectionKind; 3] = [
        SelectionKind::Cspm,
        SelectionKind::Images,
        SelectionKind::Ticket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionKind::Cspm => "CSPM",
            SelectionKind::Images => "Images",
            SelectionKind::Ticket => "Ticket",
        }
    }

    /// Position of this kind in the fixed order
    pub fn index(&self) -> usize {
        match self {
            SelectionKind::Cspm => 0,
            SelectionKind::Images => 1,
            SelectionKind::Ticket => 2,
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CSPM" => Ok(SelectionKind::Cspm),
            "Images" => Ok(SelectionKind::Images),
            "Ticket" => Ok(SelectionKind::Ticket),
            other => Err(BoardError::UnknownCategory(other.to_string())),
        }
    }
}

/// Identifier of one entry inside a widget's selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single selected value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    pub id: EntryId,
    pub value: String,
    /// Locked entries were present at the last save and have no removal control
    pub locked: bool,
}

/// Structured, value-only form of a selection used for persistence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    #[serde(rename = "CSPM", default)]
    pub cspm: Vec<String>,
    #[serde(rename = "Images", default)]
    pub images: Vec<String>,
    #[serde(rename = "Ticket", default)]
    pub ticket: Vec<String>,
}

impl SelectionSnapshot {
    pub fn values(&self, kind: SelectionKind) -> &[String] {
        match kind {
            SelectionKind::Cspm => &self.cspm,
            SelectionKind::Images => &self.images,
            SelectionKind::Ticket => &self.ticket,
        }
    }
}

/// Category → ordered list of selected entries
#[derive(Debug, Clone, Default)]
pub struct SelectionIndex {
    cspm: Vec<SelectionEntry>,
    images: Vec<SelectionEntry>,
    ticket: Vec<SelectionEntry>,
    next_entry: u64,
}

impl SelectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an index from a persisted snapshot
    pub fn from_snapshot(snapshot: &SelectionSnapshot, locked: bool) -> Self {
        let mut index = Self::new();
        for kind in SelectionKind::ALL {
            for value in snapshot.values(kind) {
                let id = index.push(kind, value.clone());
                if locked {
                    index.lock(id);
                }
            }
        }
        index
    }

    /// Entries for one category, in selection order
    pub fn entries(&self, kind: SelectionKind) -> &[SelectionEntry] {
        match kind {
            SelectionKind::Cspm => &self.cspm,
            SelectionKind::Images => &self.images,
            SelectionKind::Ticket => &self.ticket,
        }
    }

    fn entries_mut(&mut self, kind: SelectionKind) -> &mut Vec<SelectionEntry> {
        match kind {
            SelectionKind::Cspm => &mut self.cspm,
            SelectionKind::Images => &mut self.images,
            SelectionKind::Ticket => &mut self.ticket,
        }
    }

    /// Values for one category, in selection order
    pub fn values(&self, kind: SelectionKind) -> Vec<&str> {
        self.entries(kind).iter().map(|e| e.value.as_str()).collect()
    }

    pub fn contains(&self, kind: SelectionKind, value: &str) -> bool {
        self.entries(kind).iter().any(|e| e.value == value)
    }

    /// Append a value unless the category already holds it.
    ///
    /// Returns the new entry's id, or `None` when the value was present.
    pub fn add(&mut self, kind: SelectionKind, value: impl Into<String>) -> Option<EntryId> {
        let value = value.into();
        if self.contains(kind, &value) {
            return None;
        }
        Some(self.push(kind, value))
    }

    /// Append a value unconditionally
    pub fn push(&mut self, kind: SelectionKind, value: impl Into<String>) -> EntryId {
        let id = EntryId(self.next_entry);
        self.next_entry += 1;
        self.entries_mut(kind).push(SelectionEntry {
            id,
            value: value.into(),
            locked: false,
        });
        id
    }

    /// Remove every occurrence of `value` from one category.
    ///
    /// Returns the number of entries removed.
    pub fn remove_value(&mut self, kind: SelectionKind, value: &str) -> usize {
        let entries = self.entries_mut(kind);
        let before = entries.len();
        entries.retain(|e| e.value != value);
        before - entries.len()
    }

    /// Locate an entry by id
    pub fn find(&self, id: EntryId) -> Option<(SelectionKind, &SelectionEntry)> {
        SelectionKind::ALL.into_iter().find_map(|kind| {
            self.entries(kind)
                .iter()
                .find(|e| e.id == id)
                .map(|e| (kind, e))
        })
    }

    /// Remove exactly one entry by id. Locked entries are refused.
    pub fn remove_entry(&mut self, id: EntryId) -> BoardResult<(SelectionKind, SelectionEntry)> {
        let (kind, locked) = match self.find(id) {
            Some((kind, entry)) => (kind, entry.locked),
            None => return Err(BoardError::EntryNotFound(id)),
        };

        if locked {
            return Err(BoardError::EntryLocked(id));
        }

        let entries = self.entries_mut(kind);
        let position = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(BoardError::EntryNotFound(id))?;
        Ok((kind, entries.remove(position)))
    }

    fn lock(&mut self, id: EntryId) {
        for kind in SelectionKind::ALL {
            if let Some(entry) = self.entries_mut(kind).iter_mut().find(|e| e.id == id) {
                entry.locked = true;
                return;
            }
        }
    }

    /// Lock every entry; returns how many were newly locked
    pub fn lock_all(&mut self) -> usize {
        let mut locked = 0;
        for kind in SelectionKind::ALL {
            for entry in self.entries_mut(kind).iter_mut().filter(|e| !e.locked) {
                entry.locked = true;
                locked += 1;
            }
        }
        locked
    }

    /// Total number of entries across all categories
    pub fn len(&self) -> usize {
        self.cspm.len() + self.images.len() + self.ticket.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        let collect = |entries: &[SelectionEntry]| -> Vec<String> {
            entries.iter().map(|e| e.value.clone()).collect()
        };
        SelectionSnapshot {
            cspm: collect(&self.cspm),
            images: collect(&self.images),
            ticket: collect(&self.ticket),
        }
    }
}
