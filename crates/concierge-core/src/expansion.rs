//! Accordion disclosure state.
//!
//! Each id is expanded or collapsed independently of every other id; this
//! is not a radio group.

use std::collections::BTreeSet;

use concierge_model::EntryId;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpansionState {
    expanded: BTreeSet<EntryId>,
}

impl ExpansionState {
    pub fn seeded(ids: impl IntoIterator<Item = EntryId>) -> Self {
        Self {
            expanded: ids.into_iter().collect(),
        }
    }

    /// Flip membership of `id` and return the new membership.
    pub fn toggle(&mut self, id: EntryId) -> bool {
        if self.expanded.remove(id.as_str()) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Disclose `id` alone, collapsing everything else (sub-tab buttons).
    pub fn show_only(&mut self, id: EntryId) {
        self.expanded.clear();
        self.expanded.insert(id);
    }

    /// Replace the whole set, e.g. with a category's default keys.
    pub fn reseed(&mut self, ids: impl IntoIterator<Item = EntryId>) {
        self.expanded = ids.into_iter().collect();
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntryId> {
        self.expanded.iter()
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
