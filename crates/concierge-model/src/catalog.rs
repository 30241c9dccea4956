//! The immutable catalog tree and its read-only accessors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entry::{AttributeFilter, Entry};
use crate::error::{self, LookupError, ModelError};
use crate::ids::{CategoryId, EntryId};

/// A mutually exclusive top-level partition of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
    /// Unavailable categories are listed but cannot be activated.
    #[serde(default = "default_available")]
    pub available: bool,
    /// Expansion keys disclosed whenever this category becomes active.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_expanded: Vec<EntryId>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

fn default_available() -> bool {
    true
}

impl Category {
    pub fn new(id: CategoryId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            available: true,
            default_expanded: Vec::new(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    #[must_use]
    pub fn with_default_expanded(mut self, id: EntryId) -> Self {
        self.default_expanded.push(id);
        self
    }

    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Depth-first, pre-order search of this category's subtree.
    ///
    /// Entry ids are only unique among siblings, so the first match wins.
    pub fn find_entry(&self, id: &str) -> Option<&Entry> {
        find_in(&self.entries, id)
    }
}

fn find_in<'a>(entries: &'a [Entry], id: &str) -> Option<&'a Entry> {
    for entry in entries {
        if entry.id == id {
            return Some(entry);
        }
        if let Some(found) = find_in(&entry.children, id) {
            return Some(found);
        }
    }
    None
}

/// Entries sharing one attribute value, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGroup<'a> {
    pub value: &'a str,
    pub entries: Vec<&'a Entry>,
}

/// Validated, read-only catalog.
///
/// Construction checks that there is at least one category, that category
/// ids are unique, and that entry ids are unique among siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct RawCatalog {
    categories: Vec<Category>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = ModelError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Self::new(raw.categories)
    }
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> error::Result<Self> {
        if categories.is_empty() {
            return Err(ModelError::EmptyCatalog);
        }
        let mut seen = BTreeSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(ModelError::DuplicateCategory(category.id.to_string()));
            }
            check_siblings(category.id.as_str(), &category.entries)?;
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Result<&Category, LookupError> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .ok_or_else(|| LookupError::CategoryNotFound(id.to_string()))
    }

    pub fn first_available(&self) -> Option<&Category> {
        self.categories.iter().find(|category| category.available)
    }

    /// Direct entries of `category`, restricted to those matching `filter`.
    ///
    /// Catalog order is preserved. A filter nothing matches yields an empty
    /// list, not an error.
    pub fn list_entries(
        &self,
        category: &str,
        filter: Option<&AttributeFilter>,
    ) -> Result<Vec<&Entry>, LookupError> {
        let category = self.category(category)?;
        Ok(category
            .entries
            .iter()
            .filter(|entry| filter.is_none_or(|filter| entry.matches(filter)))
            .collect())
    }

    pub fn find_entry(&self, category: &str, id: &str) -> Result<&Entry, LookupError> {
        self.category(category)?
            .find_entry(id)
            .ok_or_else(|| LookupError::entry_not_found(category, id))
    }

    /// Partition a category's entries by the value of `key`.
    ///
    /// Groups are ordered by first appearance; entries without the attribute
    /// are left out.
    pub fn group_entries(
        &self,
        category: &str,
        key: &str,
    ) -> Result<Vec<EntryGroup<'_>>, LookupError> {
        let mut groups: Vec<EntryGroup<'_>> = Vec::new();
        for entry in &self.category(category)?.entries {
            let Some(value) = entry.attribute(key) else {
                continue;
            };
            match groups.iter_mut().find(|group| group.value == value) {
                Some(group) => group.entries.push(entry),
                None => groups.push(EntryGroup {
                    value,
                    entries: vec![entry],
                }),
            }
        }
        Ok(groups)
    }
}

fn check_siblings(parent: &str, entries: &[Entry]) -> error::Result<()> {
    let mut seen = BTreeSet::new();
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(ModelError::DuplicateEntry {
                parent: parent.to_string(),
                entry: entry.id.to_string(),
            });
        }
        if entry.has_children() {
            let path = format!("{parent}/{}", entry.id);
            check_siblings(&path, &entry.children)?;
        }
    }
    Ok(())
}
