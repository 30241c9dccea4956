//! Browser sessions backing the one-shot `list` and `show` commands.
//!
//! Both go through [`CatalogBrowser`] so they obey the same category rules
//! as scripted browsing.

use concierge_catalog::CatalogBundle;
use concierge_core::{BrowseError, CatalogBrowser};
use concierge_model::AttributeFilter;

/// Browser on the list view of `category`, with `filter` applied.
pub fn list_view(
    bundle: &CatalogBundle,
    category: &str,
    filter: Option<&AttributeFilter>,
) -> Result<CatalogBrowser, BrowseError> {
    let mut browser = bundle.browser()?;
    browser.select_category(category)?;
    if let Some(filter) = filter
        && !browser.filter().is_active(&filter.key, &filter.value)
    {
        browser.set_filter(&filter.key, &filter.value);
    }
    Ok(browser)
}

/// Browser drilled into `entry` of `category`.
pub fn detail_view(
    bundle: &CatalogBundle,
    category: &str,
    entry: &str,
) -> Result<CatalogBrowser, BrowseError> {
    let mut browser = list_view(bundle, category, None)?;
    browser.select_entity(entry)?;
    Ok(browser)
}
