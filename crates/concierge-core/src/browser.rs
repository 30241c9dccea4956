//! The catalog browser: one session's navigation, filter and expansion
//! state over a shared, immutable catalog.
//!
//! # Example
//!
//! ```ignore
//! let mut browser = CatalogBrowser::new(Arc::new(catalog))?;
//! browser.select_category("medical")?;
//! browser.select_entity("new-york")?;
//! let snapshot = browser.snapshot();
//! ```

use std::sync::Arc;

use concierge_model::{Catalog, Category, Entry, EntryId};
use serde::Serialize;
use tracing::{debug, warn};

use crate::action::BrowserAction;
use crate::config::{BrowserConfig, FilterScope};
use crate::error::BrowseError;
use crate::expansion::ExpansionState;
use crate::filter::FilterState;
use crate::navigation::{NavigationMode, NavigationState};

/// Owned, read-only view of the browser after a transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserSnapshot {
    pub navigation: NavigationState,
    pub mode: NavigationMode,
    pub filter: FilterState,
    pub expansion: ExpansionState,
    /// The list view of the active category under the current filter.
    pub visible_entries: Vec<Entry>,
    pub selected_entry: Option<Entry>,
}

#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    catalog: Arc<Catalog>,
    config: BrowserConfig,
    navigation: NavigationState,
    filter: FilterState,
    expansion: ExpansionState,
}

impl CatalogBrowser {
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, BrowseError> {
        Self::with_config(catalog, BrowserConfig::default())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: BrowserConfig) -> Result<Self, BrowseError> {
        let initial = match &config.initial_category {
            Some(id) => {
                let category = catalog.category(id.as_str())?;
                if !category.available {
                    return Err(BrowseError::CategoryUnavailable(id.to_string()));
                }
                category
            }
            None => catalog
                .first_available()
                .ok_or(BrowseError::NoAvailableCategory)?,
        };
        let navigation = NavigationState::new(initial.id.clone());
        let expansion = ExpansionState::seeded(initial.default_expanded.iter().cloned());
        debug!(category = %initial.id, scope = ?config.filter_scope, "browser created");
        Ok(Self {
            navigation,
            filter: FilterState::default(),
            expansion,
            catalog,
            config,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn mode(&self) -> NavigationMode {
        self.navigation.mode()
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.catalog
            .category(self.navigation.active_category().as_str())
            .ok()
    }

    /// List view of the active category under the current filter.
    ///
    /// In detail mode this is the list "back" returns to.
    pub fn visible_entries(&self) -> Vec<&Entry> {
        self.catalog
            .list_entries(
                self.navigation.active_category().as_str(),
                self.filter.active(),
            )
            .unwrap_or_default()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        let selected = self.navigation.selected_entity()?;
        self.catalog
            .find_entry(
                self.navigation.active_category().as_str(),
                selected.as_str(),
            )
            .ok()
    }

    /// Activate a category: clears drill-down, re-seeds expansion from the
    /// category's default keys, and clears a category-scoped filter.
    pub fn select_category(&mut self, id: &str) -> Result<(), BrowseError> {
        let category = match self.catalog.category(id) {
            Ok(category) => category,
            Err(err) => {
                warn!(category = id, "category not found");
                return Err(err.into());
            }
        };
        if !category.available {
            warn!(category = id, "category not available");
            return Err(BrowseError::CategoryUnavailable(id.to_string()));
        }
        let category_id = category.id.clone();
        let seeds = category.default_expanded.clone();

        self.navigation.select_category(category_id);
        if self.config.filter_scope == FilterScope::Category {
            self.filter.clear_filter();
        }
        self.expansion.reseed(seeds);
        debug!(category = id, expanded = self.expansion.len(), "category selected");
        Ok(())
    }

    /// Drill into an entity of the active category.
    ///
    /// With `seed_expansion_from_filter` set, the expansion set is re-seeded
    /// from the active filter value.
    pub fn select_entity(&mut self, id: &str) -> Result<(), BrowseError> {
        if let Err(err) = self.navigation.select_entity(&self.catalog, id) {
            warn!(entity = id, error = %err, "entity not selectable");
            return Err(err.into());
        }
        if self.config.seed_expansion_from_filter {
            self.seed_expansion_for_detail();
        }
        debug!(entity = id, "entity selected");
        Ok(())
    }

    fn seed_expansion_for_detail(&mut self) {
        let section = self
            .filter
            .active()
            .and_then(|filter| EntryId::new(filter.value.as_str()).ok());
        match section {
            Some(section) => self.expansion.show_only(section),
            None => {
                let seeds = self
                    .active_category()
                    .map(|category| category.default_expanded.clone())
                    .unwrap_or_default();
                self.expansion.reseed(seeds);
            }
        }
    }

    pub fn go_back(&mut self) {
        if self.navigation.mode().is_detail() {
            debug!("back to list");
        }
        self.navigation.go_back();
    }

    /// Toggle the `key == value` filter. Returns whether a filter is active.
    pub fn set_filter(&mut self, key: &str, value: &str) -> bool {
        let active = self.filter.set_filter(key, value);
        debug!(key, value, active, "filter toggled");
        active
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear_filter();
        debug!("filter cleared");
    }

    /// Toggle disclosure of `id`. Returns the new membership.
    pub fn toggle(&mut self, id: EntryId) -> bool {
        let expanded = self.expansion.toggle(id);
        debug!(expanded, "expansion toggled");
        expanded
    }

    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
    }

    pub fn show_only(&mut self, id: EntryId) {
        debug!(id = %id, "show only");
        self.expansion.show_only(id);
    }

    pub fn apply(&mut self, action: BrowserAction) -> Result<(), BrowseError> {
        match action {
            BrowserAction::SelectCategory(id) => self.select_category(id.as_str())?,
            BrowserAction::SelectEntity(id) => self.select_entity(id.as_str())?,
            BrowserAction::GoBack => self.go_back(),
            BrowserAction::SetFilter(filter) => {
                self.set_filter(&filter.key, &filter.value);
            }
            BrowserAction::ClearFilter => self.clear_filter(),
            BrowserAction::Toggle(id) => {
                self.toggle(id);
            }
            BrowserAction::CollapseAll => self.collapse_all(),
            BrowserAction::ShowOnly(id) => self.show_only(id),
        }
        Ok(())
    }

    pub fn snapshot(&self) -> BrowserSnapshot {
        BrowserSnapshot {
            navigation: self.navigation.clone(),
            mode: self.mode(),
            filter: self.filter.clone(),
            expansion: self.expansion.clone(),
            visible_entries: self.visible_entries().into_iter().cloned().collect(),
            selected_entry: self.selected_entry().cloned(),
        }
    }
}
