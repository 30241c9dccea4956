#![deny(unsafe_code)]

pub mod catalog;
pub mod entry;
pub mod error;
pub mod ids;

pub use catalog::{Catalog, Category, EntryGroup};
pub use entry::{AttributeFilter, Entry};
pub use error::{LookupError, ModelError, Result};
pub use ids::{CategoryId, EntryId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_errors_render_ids() {
        let err = LookupError::EntryNotFound {
            category: "medical".to_string(),
            entry: "ny-er-9".to_string(),
        };
        assert_eq!(err.to_string(), "entry ny-er-9 not found in category medical");
    }

    #[test]
    fn catalog_serializes() {
        let catalog = Catalog::new(vec![Category::new(
            CategoryId::new("safety").expect("category id"),
            "Safety",
        )])
        .expect("catalog");
        let json = serde_json::to_string(&catalog).expect("serialize catalog");
        let round: Catalog = serde_json::from_str(&json).expect("deserialize catalog");
        assert_eq!(round.categories()[0].id, "safety");
    }
}
