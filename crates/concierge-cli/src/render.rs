//! Table rendering for catalog output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use concierge_core::distance_km;
use concierge_model::{Catalog, Entry, EntryGroup};

/// Attribute holding a display distance such as `"5.2 mi"`.
pub const DISTANCE_KEY: &str = "distance";

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn categories_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Label"),
        header_cell("Entries"),
        header_cell("Available"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for category in catalog.categories() {
        let available = if category.available {
            Cell::new("yes").fg(Color::Green)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![
            Cell::new(category.id.as_str()).add_attribute(Attribute::Bold),
            Cell::new(&category.label),
            Cell::new(category.entries.len()),
            available,
        ]);
    }
    table
}

pub fn entries_table(entries: &[&Entry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entry"),
        header_cell("Label"),
        header_cell("Attributes"),
        header_cell("Children"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for entry in entries {
        table.add_row(entry_row(entry));
    }
    table
}

pub fn grouped_table(key: &str, groups: &[EntryGroup<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(key),
        header_cell("Entry"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    for group in groups {
        for (idx, entry) in group.entries.iter().enumerate() {
            let group_cell = if idx == 0 {
                Cell::new(group.value)
                    .fg(Color::Cyan)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                group_cell,
                Cell::new(entry.id.as_str()),
                Cell::new(&entry.label),
            ]);
        }
    }
    table
}

/// Attribute/value rows for one entry. A `distance` attribute gains its
/// kilometre equivalent.
pub fn detail_table(entry: &Entry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Attribute"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![dim_cell("id"), Cell::new(entry.id.as_str())]);
    table.add_row(vec![dim_cell("label"), Cell::new(&entry.label)]);
    let km = distance_km(entry, DISTANCE_KEY);
    for (key, value) in &entry.attributes {
        let shown = match km {
            Some(km) if key == DISTANCE_KEY => format!("{} ({km:.1} km)", value.trim()),
            _ => value.clone(),
        };
        table.add_row(vec![Cell::new(key), Cell::new(shown)]);
    }
    table
}

/// Number of children per distinct value of `key`, in first-seen order.
pub fn child_counts<'a>(entry: &'a Entry, key: &str) -> Vec<(&'a str, usize)> {
    let mut values: Vec<&str> = Vec::new();
    for child in &entry.children {
        if let Some(value) = child.attribute(key)
            && !values.contains(&value)
        {
            values.push(value);
        }
    }
    values
        .into_iter()
        .map(|value| (value, entry.count_children_where(key, value)))
        .collect()
}

pub fn counts_table(key: &str, counts: &[(&str, usize)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(key), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (value, count) in counts {
        table.add_row(vec![Cell::new(value), Cell::new(count)]);
    }
    table
}

fn entry_row(entry: &Entry) -> Vec<Cell> {
    let attributes = entry
        .attributes
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ");
    let children = if entry.has_children() {
        Cell::new(entry.children.len())
    } else {
        dim_cell("-")
    };
    vec![
        Cell::new(entry.id.as_str()).add_attribute(Attribute::Bold),
        Cell::new(&entry.label),
        Cell::new(attributes),
        children,
    ]
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
