//! Catalog directory path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the catalog directory.
pub const CATALOG_ENV_VAR: &str = "CONCIERGE_CATALOG_DIR";

/// Catalog data file inside a catalog directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// Optional browser configuration inside a catalog directory.
pub const CONFIG_FILE: &str = "browser.toml";

/// Bundled catalog shipped at the workspace root.
pub fn bundled_catalog_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../catalog")
}

/// Get the catalog root directory.
///
/// Resolution order:
/// 1. `explicit` (e.g. a `--catalog-dir` flag)
/// 2. `CONCIERGE_CATALOG_DIR` environment variable
/// 3. `catalog/` directory relative to workspace root
pub fn catalog_root(explicit: Option<&Path>) -> PathBuf {
    resolve_root(explicit, std::env::var(CATALOG_ENV_VAR).ok())
}

pub(crate) fn resolve_root(explicit: Option<&Path>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => bundled_catalog_root(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let root = resolve_root(Some(Path::new("/data/guide")), Some("/env/guide".into()));
        assert_eq!(root, PathBuf::from("/data/guide"));
    }

    #[test]
    fn env_value_beats_bundled() {
        let root = resolve_root(None, Some("/env/guide".into()));
        assert_eq!(root, PathBuf::from("/env/guide"));
    }

    #[test]
    fn blank_env_value_falls_back_to_bundled() {
        assert_eq!(resolve_root(None, Some("  ".into())), bundled_catalog_root());
        assert_eq!(resolve_root(None, None), bundled_catalog_root());
    }
}
