//! Single-select attribute filter with tap-again-to-clear semantics.

use concierge_model::AttributeFilter;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    active: Option<AttributeFilter>,
}

impl FilterState {
    pub fn active(&self) -> Option<&AttributeFilter> {
        self.active.as_ref()
    }

    /// Whether the pill for `key == value` is currently selected.
    pub fn is_active(&self, key: &str, value: &str) -> bool {
        self.active
            .as_ref()
            .is_some_and(|filter| filter.key == key && filter.value == value)
    }

    /// Select `key == value`, or clear it when it is already selected.
    ///
    /// Returns whether a filter is active afterwards.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let filter = AttributeFilter::new(key, value);
        if self.active.as_ref() == Some(&filter) {
            self.active = None;
        } else {
            self.active = Some(filter);
        }
        self.active.is_some()
    }

    pub fn clear_filter(&mut self) {
        self.active = None;
    }
}
