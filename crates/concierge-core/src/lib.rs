//! Catalog browser core.
//!
//! Centralizes the navigation and filter state every guide page needs:
//!
//! - **NavigationState**: active category and single-level drill-down
//! - **FilterState**: at most one `key == value` attribute filter
//! - **ExpansionState**: independently toggled accordion keys
//! - **CatalogBrowser**: composes the three over an `Arc<Catalog>`

#![deny(unsafe_code)]

pub mod action;
pub mod browser;
pub mod config;
pub mod error;
pub mod expansion;
pub mod filter;
pub mod navigation;
pub mod units;

pub use action::BrowserAction;
pub use browser::{BrowserSnapshot, CatalogBrowser};
pub use config::{BrowserConfig, FilterScope};
pub use error::{BrowseError, ParseActionError};
pub use expansion::ExpansionState;
pub use filter::FilterState;
pub use navigation::{NavigationMode, NavigationState};
pub use units::{distance_km, format_distance, parse_miles, to_km};
