use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use concierge_catalog::CatalogBundle;
use concierge_cli::render::{
    categories_table, child_counts, counts_table, detail_table, entries_table, grouped_table,
};
use concierge_cli::views::{detail_view, list_view};
use concierge_core::format_distance;

use crate::cli::{BrowseArgs, ListArgs, ShowArgs};

fn load_bundle(catalog_dir: Option<&Path>) -> Result<CatalogBundle> {
    CatalogBundle::load_default(catalog_dir).context("load catalog")
}

pub fn run_categories(catalog_dir: Option<&Path>) -> Result<()> {
    let bundle = load_bundle(catalog_dir)?;
    println!("{}", categories_table(&bundle.catalog));
    Ok(())
}

pub fn run_list(catalog_dir: Option<&Path>, args: &ListArgs) -> Result<()> {
    let bundle = load_bundle(catalog_dir)?;
    let browser = list_view(&bundle, &args.category, args.filter.as_ref())?;
    if let Some(key) = &args.group_by {
        let groups = browser.catalog().group_entries(&args.category, key)?;
        println!("{}", grouped_table(key, &groups));
        return Ok(());
    }
    let entries = browser.visible_entries();
    if entries.is_empty() {
        println!("No entries.");
        return Ok(());
    }
    println!("{}", entries_table(&entries));
    Ok(())
}

pub fn run_show(catalog_dir: Option<&Path>, args: &ShowArgs) -> Result<()> {
    let bundle = load_bundle(catalog_dir)?;
    let browser = detail_view(&bundle, &args.category, &args.entry)?;
    let entry = browser
        .selected_entry()
        .ok_or_else(|| anyhow!("no entry selected"))?;
    println!("{}", detail_table(entry));
    if entry.has_children() {
        let children: Vec<_> = entry.children.iter().collect();
        println!();
        println!("{}", entries_table(&children));
    }
    if let Some(key) = &args.count_by {
        println!();
        println!("{}", counts_table(key, &child_counts(entry, key)));
    }
    Ok(())
}

pub fn run_distance(text: &str) -> Result<()> {
    let formatted =
        format_distance(text).ok_or_else(|| anyhow!("not a distance: {text:?}"))?;
    println!("{formatted}");
    Ok(())
}

/// Replay actions against a fresh browser. Failed transitions are logged
/// and skipped.
pub fn run_browse(catalog_dir: Option<&Path>, args: &BrowseArgs) -> Result<()> {
    let bundle = load_bundle(catalog_dir)?;
    let mut browser = bundle.browser().context("start browser")?;
    let mut rejected = 0usize;
    for action in &args.actions {
        if let Err(error) = browser.apply(action.clone()) {
            rejected += 1;
            warn!(action = %action, %error, "action rejected");
        }
    }
    info!(
        applied = args.actions.len() - rejected,
        rejected,
        "replay complete"
    );
    let snapshot = browser.snapshot();
    let json = if args.compact {
        serde_json::to_string(&snapshot)
    } else {
        serde_json::to_string_pretty(&snapshot)
    }
    .context("serialize snapshot")?;
    println!("{json}");
    Ok(())
}
