use concierge_model::{LookupError, ModelError};

/// Failures of browser transitions.
///
/// Every failing transition leaves navigation, filter and expansion state
/// exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowseError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("category {0} is not available")]
    CategoryUnavailable(String),

    #[error("catalog has no available category")]
    NoAvailableCategory,
}

impl BrowseError {
    /// True for unresolved category or entry identifiers.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }
}

/// Failures parsing a textual [`BrowserAction`](crate::BrowserAction).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseActionError {
    #[error("unknown action: {0}")]
    Unknown(String),

    #[error("action {action} expects an argument")]
    MissingArgument { action: String },

    #[error("filter must look like key=value, got {0:?}")]
    MalformedFilter(String),

    #[error(transparent)]
    InvalidId(#[from] ModelError),
}
