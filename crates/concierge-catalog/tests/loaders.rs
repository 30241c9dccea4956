use std::fs;
use std::path::{Path, PathBuf};

use concierge_catalog::{
    CATALOG_FILE, CONFIG_FILE, CatalogBundle, CatalogError, bundled_catalog_root, load_config,
    parse_catalog, parse_config,
};
use concierge_core::{FilterScope, NavigationMode};
use concierge_model::ModelError;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "concierge-catalog-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

const SMALL_CATALOG: &str = r#"{
  "categories": [
    {
      "id": "medical",
      "label": "Medical",
      "entries": [
        {
          "id": "toronto",
          "label": "Toronto",
          "attributes": { "country": "Canada" },
          "children": [
            { "id": "tor-er-1", "label": "St. Michael's", "attributes": { "type": "er" } }
          ]
        }
      ]
    },
    {
      "id": "lodging",
      "label": "Lodging",
      "default_expanded": ["Budget"],
      "entries": [{ "id": "pod-51", "label": "Pod 51", "attributes": { "category": "Budget" } }]
    }
  ]
}"#;

#[test]
fn bundled_catalog_loads() {
    let bundle = CatalogBundle::load(&bundled_catalog_root()).unwrap();
    let ids: Vec<&str> = bundle
        .catalog
        .categories()
        .iter()
        .map(|category| category.id.as_str())
        .collect();
    assert!(ids.contains(&"medical"));
    assert!(ids.contains(&"lodging"));

    let transport = bundle.catalog.category("transport").unwrap();
    assert!(!transport.available);

    let new_york = bundle.catalog.find_entry("medical", "new-york").unwrap();
    assert_eq!(new_york.count_children_where("type", "er"), 2);
    assert_eq!(new_york.count_children_where("type", "urgent"), 1);
}

#[test]
fn bundled_browser_starts_on_configured_category() {
    let bundle = CatalogBundle::load(&bundled_catalog_root()).unwrap();
    let browser = bundle.browser().unwrap();
    assert_eq!(browser.navigation().active_category().as_str(), "safety");
    assert_eq!(browser.mode(), NavigationMode::List);
    assert_eq!(bundle.config.filter_scope, FilterScope::Category);
}

#[test]
fn directory_without_config_uses_defaults() {
    let root = unique_temp_dir("no-config");
    write(&root.join(CATALOG_FILE), SMALL_CATALOG);

    let bundle = CatalogBundle::load(&root).unwrap();
    assert!(bundle.config.initial_category.is_none());
    assert_eq!(bundle.config.filter_scope, FilterScope::Category);

    let browser = bundle.browser().unwrap();
    assert_eq!(browser.navigation().active_category().as_str(), "medical");
}

#[test]
fn config_selects_initial_category_and_scope() {
    let root = unique_temp_dir("config");
    write(&root.join(CATALOG_FILE), SMALL_CATALOG);
    write(
        &root.join(CONFIG_FILE),
        "initial_category = \"lodging\"\nfilter_scope = \"global\"\n",
    );

    let bundle = CatalogBundle::load(&root).unwrap();
    assert_eq!(bundle.config.filter_scope, FilterScope::Global);

    let browser = bundle.browser().unwrap();
    assert_eq!(browser.navigation().active_category().as_str(), "lodging");
    assert!(browser.expansion().is_expanded("Budget"));
}

#[test]
fn missing_root_is_reported() {
    let root = unique_temp_dir("missing").join("not-here");
    let err = CatalogBundle::load(&root).unwrap_err();
    assert!(matches!(err, CatalogError::MissingRoot { path } if path == root));
}

#[test]
fn missing_catalog_file_is_io_error() {
    let root = unique_temp_dir("empty");
    let err = CatalogBundle::load(&root).unwrap_err();
    match err {
        CatalogError::Io { path, .. } => assert_eq!(path, root.join(CATALOG_FILE)),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_reported_with_path() {
    let path = Path::new("guide/catalog.json");
    let err = parse_catalog("{ \"categories\": [", path).unwrap_err();
    assert!(matches!(&err, CatalogError::Json { path: p, .. } if p == path));
    assert!(err.to_string().contains("guide/catalog.json"));
}

#[test]
fn duplicate_category_is_rejected() {
    let text = r#"{"categories": [
        {"id": "medical", "label": "Medical", "entries": []},
        {"id": "medical", "label": "Medical again", "entries": []}
    ]}"#;
    let err = parse_catalog(text, Path::new("catalog.json")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains(&ModelError::DuplicateCategory("medical".into()).to_string()));
}

#[test]
fn empty_catalog_is_rejected() {
    let err = parse_catalog(r#"{"categories": []}"#, Path::new("catalog.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Json { .. }));
}

#[test]
fn blank_entry_id_is_rejected() {
    let text = r#"{"categories": [
        {"id": "safety", "label": "Safety", "entries": [{"id": "  ", "label": "Blank"}]}
    ]}"#;
    assert!(parse_catalog(text, Path::new("catalog.json")).is_err());
}

#[test]
fn unknown_config_field_is_rejected() {
    let err = parse_config("start = \"medical\"\n", Path::new("browser.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Toml { .. }));
}

#[test]
fn bad_filter_scope_is_rejected() {
    let err = parse_config("filter_scope = \"session\"\n", Path::new("browser.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Toml { .. }));
}

#[test]
fn absent_config_file_is_default() {
    let root = unique_temp_dir("absent-config");
    let config = load_config(&root.join(CONFIG_FILE)).unwrap();
    assert!(config.initial_category.is_none());
}

#[test]
fn config_enables_filter_seeded_expansion() {
    let config = parse_config(
        "seed_expansion_from_filter = true\n",
        Path::new("browser.toml"),
    )
    .unwrap();
    assert!(config.seed_expansion_from_filter);
    assert_eq!(config.filter_scope, FilterScope::Category);
}
