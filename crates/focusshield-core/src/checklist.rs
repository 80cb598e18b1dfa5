//! Checklists.
//!
//! Two flavors. The session checklist is label-keyed because its record
//! format stores the check marks as a label-to-bool map, which means
//! duplicate labels share one mark; that collision is an accepted
//! limitation of the format. The tracked lists (tooling roadmap, deploy
//! steps) are id-keyed and don't have the problem.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The daily session checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    items: Vec<String>,
    checked: HashMap<String, bool>,
}

impl Checklist {
    pub fn new(items: Vec<String>, checked: HashMap<String, bool>) -> Self {
        Self { items, checked }
    }

    /// Append an item. Duplicates are allowed; they will share a mark.
    pub fn add(&mut self, label: impl Into<String>) {
        self.items.push(label.into());
    }

    /// Flip an item's mark and return the new state. Unknown labels
    /// start unchecked, so toggling one marks it checked.
    pub fn toggle(&mut self, label: &str) -> bool {
        let entry = self.checked.entry(label.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Remove the first item with the given label. The mark is dropped
    /// once no item with that label remains.
    pub fn remove(&mut self, label: &str) -> bool {
        let Some(pos) = self.items.iter().position(|l| l == label) else {
            return false;
        };
        self.items.remove(pos);
        if !self.items.iter().any(|l| l == label) {
            self.checked.remove(label);
        }
        true
    }

    pub fn is_checked(&self, label: &str) -> bool {
        self.checked.get(label).copied().unwrap_or(false)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn checked_map(&self) -> &HashMap<String, bool> {
        &self.checked
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|l| self.is_checked(l)).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One entry in an id-keyed tracked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedItem {
    pub id: Uuid,
    pub label: String,
    #[serde(default)]
    pub done: bool,
}

impl TrackedItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            done: false,
        }
    }
}

/// An ordered list of done/not-done items addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackedList {
    items: Vec<TrackedItem>,
}

impl TrackedList {
    pub fn new(items: Vec<TrackedItem>) -> Self {
        Self { items }
    }

    pub fn add(&mut self, label: impl Into<String>) -> &TrackedItem {
        self.items.push(TrackedItem::new(label));
        self.items.last().unwrap_or_else(|| unreachable!())
    }

    /// Flip an item's done flag, returning the new state if it exists.
    pub fn toggle(&mut self, id: &Uuid) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| &i.id == id)?;
        item.done = !item.done;
        Some(item.done)
    }

    pub fn remove(&mut self, id: &Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[TrackedItem] {
        &self.items
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|i| i.done).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
