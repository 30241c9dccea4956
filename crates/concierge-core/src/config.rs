//! Browser configuration.

use concierge_model::CategoryId;
use serde::{Deserialize, Serialize};

/// Whether the active filter survives a category switch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterScope {
    /// Cleared whenever a category is selected (tab groups, lodging tiers).
    #[default]
    Category,
    /// Kept across category switches.
    Global,
}

/// Per-browser settings, usually read from `browser.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrowserConfig {
    /// Category shown first. Defaults to the first available category.
    pub initial_category: Option<CategoryId>,
    pub filter_scope: FilterScope,
    /// On drill-down, expand only the section named by the active filter
    /// value, or the category's default sections when no filter is set.
    pub seed_expansion_from_filter: bool,
}

impl BrowserConfig {
    #[must_use]
    pub fn with_initial_category(mut self, category: CategoryId) -> Self {
        self.initial_category = Some(category);
        self
    }

    #[must_use]
    pub fn with_seed_expansion_from_filter(mut self, enable: bool) -> Self {
        self.seed_expansion_from_filter = enable;
        self
    }

    #[must_use]
    pub fn with_filter_scope(mut self, scope: FilterScope) -> Self {
        self.filter_scope = scope;
        self
    }
}
