//! Row selection state.
//!
//! Selection is keyed by row id, not position, so it stays attached to the
//! same records when the table is sorted, filtered or paged.

use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

/// ID-based selection with an anchor for range selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Currently selected IDs
    selected: HashSet<String>,
    /// Id of the last explicit (non-range) selection action
    anchor: Option<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Get the anchor ID for range selection.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Set one row's flag and make it the range anchor.
    /// Returns true if the selection changed.
    pub fn set(&mut self, id: &str, selected: bool) -> bool {
        self.anchor = Some(id.to_string());
        if selected {
            self.selected.insert(id.to_string())
        } else {
            self.selected.remove(id)
        }
    }

    /// Flip one row's flag (checkbox click). Returns the new flag.
    pub fn toggle(&mut self, id: &str) -> bool {
        let selected = !self.is_selected(id);
        self.set(id, selected);
        selected
    }

    /// Set every id between two positions (inclusive, either order) of the
    /// rendered sequence. The anchor is left untouched.
    ///
    /// Out-of-range positions make this a no-op. Returns true if the
    /// selection changed.
    pub fn set_range(
        &mut self,
        anchor_index: usize,
        target_index: usize,
        selected: bool,
        rendered_ids: &[String],
    ) -> bool {
        if anchor_index >= rendered_ids.len() || target_index >= rendered_ids.len() {
            return false;
        }
        let start = anchor_index.min(target_index);
        let end = anchor_index.max(target_index);
        self.set_many(&rendered_ids[start..=end], selected)
    }

    /// Set the flag of every given id. Returns true if the selection changed.
    pub fn set_many(&mut self, ids: &[String], selected: bool) -> bool {
        let mut changed = false;
        for id in ids {
            changed |= if selected {
                self.selected.insert(id.clone())
            } else {
                self.selected.remove(id)
            };
        }
        changed
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        let removed: Vec<_> = self.selected.drain().collect();
        self.anchor = None;
        removed
    }

    /// Drop ids that are not in `loaded`. The anchor is dropped too if it is
    /// no longer loaded.
    /// Returns the IDs that were removed.
    pub fn prune(&mut self, loaded: &HashSet<&str>) -> Vec<String> {
        let removed: Vec<_> = self
            .selected
            .iter()
            .filter(|id| !loaded.contains(id.as_str()))
            .cloned()
            .collect();
        for id in &removed {
            self.selected.remove(id);
        }
        if self.anchor.as_deref().is_some_and(|a| !loaded.contains(a)) {
            self.anchor = None;
        }
        removed
    }
}
