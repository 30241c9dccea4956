//! Catalog entries and attribute filters.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::EntryId;

/// One item in a catalog: a city, hotel, facility, broadcaster, ...
///
/// `attributes` is an open mapping of scalar facets used for filtering
/// (`tier`, `type`, `country`) and for inert payloads such as map URLs or
/// `tel:` links, which are carried unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub label: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Entry>,
}

impl Entry {
    pub fn new(id: EntryId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Entry) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Whether this entry satisfies `filter`.
    pub fn matches(&self, filter: &AttributeFilter) -> bool {
        self.attribute(&filter.key) == Some(filter.value.as_str())
    }

    /// Number of direct children whose `key` attribute equals `value`.
    pub fn count_children_where(&self, key: &str, value: &str) -> usize {
        self.children
            .iter()
            .filter(|child| child.attribute(key) == Some(value))
            .count()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A single `key == value` constraint on entry attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeFilter {
    pub key: String,
    pub value: String,
}

impl AttributeFilter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
