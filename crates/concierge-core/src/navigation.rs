//! Navigation state: active category plus single-level drill-down.
//!
//! The state machine has two modes:
//! - `List`: no entity selected, the category's entries are shown
//! - `Detail`: one entity of the active category is drilled into
//!
//! `select_entity` moves List -> Detail, `go_back` moves Detail -> List, and
//! `select_category` always lands in List.

use concierge_model::{Catalog, CategoryId, EntryId, LookupError};
use serde::Serialize;

/// Which of the two navigation modes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    List,
    Detail,
}

impl NavigationMode {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List)
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Detail)
    }
}

/// Active category and optional selected entity.
///
/// Fields are private so the drill-down invariant holds: a selected entity
/// was resolved under the active category when it was selected, and any
/// category switch clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    active_category: CategoryId,
    selected_entity: Option<EntryId>,
}

impl NavigationState {
    pub fn new(active_category: CategoryId) -> Self {
        Self {
            active_category,
            selected_entity: None,
        }
    }

    pub fn active_category(&self) -> &CategoryId {
        &self.active_category
    }

    pub fn selected_entity(&self) -> Option<&EntryId> {
        self.selected_entity.as_ref()
    }

    pub fn mode(&self) -> NavigationMode {
        if self.selected_entity.is_some() {
            NavigationMode::Detail
        } else {
            NavigationMode::List
        }
    }

    /// Switch category. Drill-down never survives a category switch.
    pub fn select_category(&mut self, category: CategoryId) {
        self.active_category = category;
        self.selected_entity = None;
    }

    /// Drill into `entity`, which must resolve under the active category.
    ///
    /// On failure the state is left untouched.
    pub fn select_entity(&mut self, catalog: &Catalog, entity: &str) -> Result<(), LookupError> {
        let entry = catalog.find_entry(self.active_category.as_str(), entity)?;
        self.selected_entity = Some(entry.id.clone());
        Ok(())
    }

    /// Return to the list view. Idempotent.
    pub fn go_back(&mut self) {
        self.selected_entity = None;
    }
}
