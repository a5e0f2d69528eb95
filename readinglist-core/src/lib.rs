//! Reading List Core Library
//!
//! This crate provides the types and query logic for a static catalog of
//! children's books. The catalog is loaded once from a JSON dataset and is
//! read-only afterwards; every query is a pure function of the catalog and an
//! explicit [`CatalogQuery`].

pub mod catalog;
pub mod cover;
pub mod error;
pub mod links;
pub mod reading_level;
pub mod types;
pub mod validate;
pub mod view;

pub use catalog::{Catalog, CatalogQuery, SortMode, TagFilter};
pub use cover::{CoverChain, CoverSource};
pub use error::{CatalogError, Result};
pub use links::{amazon_link, los_altos_library_link, mountain_view_library_link, LinkTarget};
pub use reading_level::{explain, LevelExplanation};
pub use types::{Book, BookId, LexileCode, RecordId};
pub use validate::{validate_dataset, validate_json, ValidationReport};
pub use view::{BookCard, BrowseState, QuickFilter, QUICK_FILTERS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new(vec![Book::new(1, "Frog and Toad", "Arnold Lobel")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.books()[0].title, "Frog and Toad");
    }
}
