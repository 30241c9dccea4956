#![deny(unsafe_code)]

pub mod error;
pub mod loaders;
pub mod paths;

pub use crate::error::{CatalogError, Result};
pub use crate::loaders::{CatalogBundle, load_catalog, load_config, parse_catalog, parse_config};
pub use crate::paths::{
    CATALOG_ENV_VAR, CATALOG_FILE, CONFIG_FILE, bundled_catalog_root, catalog_root,
};
