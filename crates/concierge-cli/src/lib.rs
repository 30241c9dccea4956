//! CLI library components for the concierge catalog browser.

pub mod logging;
pub mod render;
pub mod views;
