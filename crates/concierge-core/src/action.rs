//! User actions that drive the browser.
//!
//! Actions have a compact textual form used by scripted replays:
//!
//! | Text                   | Action                    |
//! |------------------------|---------------------------|
//! | `category:<id>`        | [`BrowserAction::SelectCategory`] |
//! | `entity:<id>`          | [`BrowserAction::SelectEntity`]   |
//! | `back`                 | [`BrowserAction::GoBack`]         |
//! | `filter:<key>=<value>` | [`BrowserAction::SetFilter`]      |
//! | `clear-filter`         | [`BrowserAction::ClearFilter`]    |
//! | `toggle:<id>`          | [`BrowserAction::Toggle`]         |
//! | `collapse-all`         | [`BrowserAction::CollapseAll`]    |
//! | `show-only:<id>`       | [`BrowserAction::ShowOnly`]       |

use std::fmt;
use std::str::FromStr;

use concierge_model::{AttributeFilter, CategoryId, EntryId};

use crate::error::ParseActionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    SelectCategory(CategoryId),
    SelectEntity(EntryId),
    GoBack,
    SetFilter(AttributeFilter),
    ClearFilter,
    Toggle(EntryId),
    CollapseAll,
    ShowOnly(EntryId),
}

impl FromStr for BrowserAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let required = || {
            arg.filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ParseActionError::MissingArgument {
                    action: name.to_string(),
                })
        };
        let action = match name {
            "category" => Self::SelectCategory(CategoryId::new(required()?)?),
            "entity" => Self::SelectEntity(EntryId::new(required()?)?),
            "back" => Self::GoBack,
            "filter" => {
                let raw = required()?;
                let (key, value) = raw
                    .split_once('=')
                    .filter(|(key, value)| !key.trim().is_empty() && !value.trim().is_empty())
                    .ok_or_else(|| ParseActionError::MalformedFilter(raw.to_string()))?;
                Self::SetFilter(AttributeFilter::new(key.trim(), value.trim()))
            }
            "clear-filter" => Self::ClearFilter,
            "toggle" => Self::Toggle(EntryId::new(required()?)?),
            "collapse-all" => Self::CollapseAll,
            "show-only" => Self::ShowOnly(EntryId::new(required()?)?),
            _ => return Err(ParseActionError::Unknown(s.to_string())),
        };
        Ok(action)
    }
}

impl fmt::Display for BrowserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectCategory(id) => write!(f, "category:{id}"),
            Self::SelectEntity(id) => write!(f, "entity:{id}"),
            Self::GoBack => f.write_str("back"),
            Self::SetFilter(filter) => write!(f, "filter:{filter}"),
            Self::ClearFilter => f.write_str("clear-filter"),
            Self::Toggle(id) => write!(f, "toggle:{id}"),
            Self::CollapseAll => f.write_str("collapse-all"),
            Self::ShowOnly(id) => write!(f, "show-only:{id}"),
        }
    }
}
