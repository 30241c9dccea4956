//! Catalog and browser configuration loading.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use concierge_core::{BrowseError, BrowserConfig, CatalogBrowser};
use concierge_model::Catalog;
use tracing::{debug, info, info_span};

use crate::error::{CatalogError, Result};
use crate::paths::{CATALOG_FILE, CONFIG_FILE, catalog_root};

/// Parse a catalog from JSON text. `path` is only used for error reporting.
pub fn parse_catalog(text: &str, path: &Path) -> Result<Catalog> {
    serde_json::from_str(text).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse browser configuration from TOML text.
pub fn parse_config(text: &str, path: &Path) -> Result<BrowserConfig> {
    toml::from_str(text).map_err(|source| CatalogError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let catalog = parse_catalog(&text, path)?;
    debug!(
        path = %path.display(),
        categories = catalog.categories().len(),
        "Parsed catalog"
    );
    Ok(catalog)
}

/// Load browser configuration. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<BrowserConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "No browser config, using defaults");
        return Ok(BrowserConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_config(&text, path)
}

/// A loaded catalog directory: the shared catalog plus its browser config.
#[derive(Debug, Clone)]
pub struct CatalogBundle {
    pub root: PathBuf,
    pub catalog: Arc<Catalog>,
    pub config: BrowserConfig,
}

impl CatalogBundle {
    /// Load `catalog.json` and the optional `browser.toml` from `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let span = info_span!("load_catalog", root = %root.display());
        let _guard = span.enter();
        if !root.is_dir() {
            return Err(CatalogError::MissingRoot {
                path: root.to_path_buf(),
            });
        }
        let catalog = load_catalog(&root.join(CATALOG_FILE))?;
        let config = load_config(&root.join(CONFIG_FILE))?;
        let entries: usize = catalog
            .categories()
            .iter()
            .map(|category| category.entries.len())
            .sum();
        info!(
            categories = catalog.categories().len(),
            entries,
            "Loaded catalog"
        );
        Ok(Self {
            root: root.to_path_buf(),
            catalog: Arc::new(catalog),
            config,
        })
    }

    /// Load from the resolved catalog root (see [`catalog_root`]).
    pub fn load_default(explicit: Option<&Path>) -> Result<Self> {
        Self::load(&catalog_root(explicit))
    }

    /// Fresh browser session over this catalog.
    pub fn browser(&self) -> std::result::Result<CatalogBrowser, BrowseError> {
        CatalogBrowser::with_config(Arc::clone(&self.catalog), self.config.clone())
    }
}
