//! Shared catalog fixture for browser tests.

#![allow(dead_code)]

use std::sync::Arc;

use concierge_model::{Catalog, Category, CategoryId, Entry, EntryId};

pub fn eid(value: &str) -> EntryId {
    EntryId::new(value).expect("entry id")
}

pub fn cid(value: &str) -> CategoryId {
    CategoryId::new(value).expect("category id")
}

fn facility(id: &str, kind: &str, distance: &str) -> Entry {
    Entry::new(eid(id), id.to_uppercase())
        .with_attribute("type", kind)
        .with_attribute("distance", distance)
}

fn hotel(id: &str, tier: &str) -> Entry {
    Entry::new(eid(id), id.to_uppercase()).with_attribute("tier", tier)
}

/// Five categories shaped like the guide's pages.
pub fn guide_catalog() -> Catalog {
    let safety = Category::new(cid("safety"), "Safety")
        .with_entry(
            Entry::new(eid("pickpocketing"), "Pickpocketing at Transit Hubs")
                .with_attribute("severity", "medium"),
        )
        .with_entry(Entry::new(eid("heat-warning"), "Heat Warning").with_attribute("severity", "high"));
    let travel = Category::new(cid("travel"), "Travel & Entry")
        .with_default_expanded(eid("customs"))
        .with_entry(Entry::new(eid("customs"), "Customs"))
        .with_entry(Entry::new(eid("stadium"), "Stadium rules"));
    let medical = Category::new(cid("medical"), "Medical")
        .with_entry(
            Entry::new(eid("new-york"), "New York/New Jersey")
                .with_attribute("country", "USA")
                .with_child(facility("ny-er-1", "er", "5.2 mi"))
                .with_child(facility("ny-uc-1", "urgent", "2.1 mi")),
        )
        .with_entry(
            Entry::new(eid("guadalajara"), "Guadalajara")
                .with_attribute("country", "Mexico")
                .with_child(facility("gdl-er-1", "er", "3.0 mi")),
        );
    let lodging = Category::new(cid("lodging"), "Lodging")
        .with_default_expanded(eid("Budget"))
        .with_entry(hotel("a", "budget"))
        .with_entry(hotel("b", "luxury"))
        .with_entry(hotel("c", "budget"));
    let transport = Category::new(cid("transport"), "Private transport")
        .unavailable()
        .with_entry(Entry::new(eid("jets"), "Private jets"));
    Catalog::new(vec![safety, travel, medical, lodging, transport]).expect("guide catalog")
}

pub fn shared_catalog() -> Arc<Catalog> {
    Arc::new(guide_catalog())
}

pub fn visible_ids(entries: &[&Entry]) -> Vec<String> {
    entries.iter().map(|entry| entry.id.to_string()).collect()
}
