//! Read-only inventory name index for lookup and fuzzy correction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One known inventory item, as supplied by the caller's snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Store-side identifier, when the snapshot carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Canonical item name.
    pub name: String,

    /// Item category, when tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Case-folded lookup over a snapshot of inventory names.
///
/// Built once per parse from the caller's snapshot and never mutated by
/// the pipeline. The first entry wins when two names fold to the same key.
#[derive(Debug, Clone, Default)]
pub struct InventoryIndex {
    entries: Vec<InventoryEntry>,
    by_folded: HashMap<String, usize>,
}

impl InventoryIndex {
    /// Build an index from a snapshot of entries.
    ///
    /// Entries whose name trims to empty are dropped.
    pub fn new(entries: Vec<InventoryEntry>) -> Self {
        let entries: Vec<InventoryEntry> = entries
            .into_iter()
            .filter(|e| !e.name.trim().is_empty())
            .collect();

        let mut by_folded = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            by_folded
                .entry(entry.name.trim().to_lowercase())
                .or_insert(idx);
        }

        Self { entries, by_folded }
    }

    /// Convenience constructor for name-only snapshots.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            names
                .into_iter()
                .map(|name| InventoryEntry {
                    id: None,
                    name: name.into(),
                    category: None,
                })
                .collect(),
        )
    }

    /// Look up an entry by case-folded exact name.
    pub fn lookup(&self, name: &str) -> Option<&InventoryEntry> {
        self.by_folded
            .get(&name.trim().to_lowercase())
            .map(|&idx| &self.entries[idx])
    }

    /// Candidate names in snapshot order, original casing.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_folded() {
        let index = InventoryIndex::from_names(["Tomato", "Soy Sauce"]);

        assert_eq!(index.lookup("tomato").unwrap().name, "Tomato");
        assert_eq!(index.lookup("SOY SAUCE").unwrap().name, "Soy Sauce");
        assert!(index.lookup("garlic").is_none());
    }

    #[test]
    fn blank_names_are_dropped() {
        let index = InventoryIndex::from_names(["", "  ", "Milk"]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn first_entry_wins_on_folded_collision() {
        let index = InventoryIndex::from_names(["Tomato", "TOMATO"]);
        assert_eq!(index.lookup("tomato").unwrap().name, "Tomato");
    }
}
