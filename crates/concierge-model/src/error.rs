#![deny(unsafe_code)]

/// Failures while building a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),

    #[error("catalog has no categories")]
    EmptyCatalog,

    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),

    #[error("duplicate entry id {entry} under {parent}")]
    DuplicateEntry { parent: String, entry: String },
}

/// Failures while resolving identifiers against a catalog.
///
/// Both variants are recoverable: callers stay in (or fall back to) the
/// list view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("entry {entry} not found in category {category}")]
    EntryNotFound { category: String, entry: String },
}

impl LookupError {
    pub(crate) fn entry_not_found(category: &str, entry: &str) -> Self {
        Self::EntryNotFound {
            category: category.to_string(),
            entry: entry.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
