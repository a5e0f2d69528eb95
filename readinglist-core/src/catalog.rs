//! The catalog and its filter/search/sort pipeline
//!
//! A [`Catalog`] owns the dataset and never changes after it is loaded. All
//! query state lives in a [`CatalogQuery`] passed in by the caller, so the same
//! query against the same catalog always yields the same sequence.

use crate::error::{CatalogError, Result};
use crate::types::{sort_key, Book, BookId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Sentinel text that selects every book
pub const ALL_TAGS: &str = "all";

/// Tag filter stage input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, TagFilter::All)
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => book.has_tag(tag),
        }
    }
}

impl From<&str> for TagFilter {
    fn from(s: &str) -> Self {
        if s == ALL_TAGS {
            TagFilter::All
        } else {
            TagFilter::Tag(s.to_string())
        }
    }
}

impl From<String> for TagFilter {
    fn from(s: String) -> Self {
        if s == ALL_TAGS {
            TagFilter::All
        } else {
            TagFilter::Tag(s)
        }
    }
}

impl FromStr for TagFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => f.write_str(ALL_TAGS),
            TagFilter::Tag(tag) => f.write_str(tag),
        }
    }
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Keep collection order
    #[default]
    None,

    /// Ascending by lexile sort key, stable
    ReadingLevel,
}

impl SortMode {
    pub fn toggled(self) -> Self {
        match self {
            SortMode::None => SortMode::ReadingLevel,
            SortMode::ReadingLevel => SortMode::None,
        }
    }
}

impl FromStr for SortMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(SortMode::None),
            "level" | "lexile" | "reading-level" => Ok(SortMode::ReadingLevel),
            _ => Err(CatalogError::InvalidSortMode(s.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::None => f.write_str("none"),
            SortMode::ReadingLevel => f.write_str("level"),
        }
    }
}

/// The three explicit inputs of a catalog query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub tag_filter: TagFilter,
    pub search_text: String,
    pub sort_mode: SortMode,
}

impl CatalogQuery {
    /// Query that returns every book in collection order
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<TagFilter>) -> Self {
        self.tag_filter = tag.into();
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_sort(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    /// Whether the search stage will run
    pub fn has_search(&self) -> bool {
        !self.search_text.trim().is_empty()
    }
}

/// Run the pipeline over a slice of books: tag filter, then text search, then sort.
///
/// The returned vector is freshly allocated; `books` is never reordered.
pub fn query<'a>(books: &'a [Book], query: &CatalogQuery) -> Vec<&'a Book> {
    let mut results: Vec<&Book> = books
        .iter()
        .filter(|book| query.tag_filter.matches(book))
        .collect();
    tracing::debug!(
        tag = %query.tag_filter,
        remaining = results.len(),
        "tag filter applied"
    );

    if query.has_search() {
        // Only the emptiness check trims; the needle keeps its whitespace
        let needle = query.search_text.to_lowercase();
        results.retain(|book| matches_search(book, &needle));
        tracing::debug!(needle = %needle, remaining = results.len(), "search applied");
    }

    if query.sort_mode == SortMode::ReadingLevel {
        results.sort_by_key(|book| sort_key(book.lexile()));
    }

    results
}

/// Case-insensitive substring match on title, author, any tag or the lexile code.
/// `needle` must already be lowercase.
fn matches_search(book: &Book, needle: &str) -> bool {
    book.title.to_lowercase().contains(needle)
        || book.author.to_lowercase().contains(needle)
        || book.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
        || book
            .lexile()
            .is_some_and(|lexile| lexile.to_lowercase().contains(needle))
}

/// Read-only collection of books
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Parse a JSON array of book records
    pub fn from_json(json: &str) -> Result<Self> {
        let books: Vec<Book> = serde_json::from_str(json)?;
        Ok(Self::new(books))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let books: Vec<Book> = serde_json::from_reader(reader)?;
        Ok(Self::new(books))
    }

    /// Load the dataset from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&data)?;
        tracing::info!(
            path = %path.display(),
            books = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// First book with the given id
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Like [`Catalog::get`], but a missing book is an error
    pub fn require(&self, id: BookId) -> Result<&Book> {
        self.get(id).ok_or(CatalogError::BookNotFound(id.get()))
    }

    /// Every distinct tag, sorted ascending
    pub fn all_tags(&self) -> Vec<&str> {
        self.books
            .iter()
            .flat_map(|book| book.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of books carrying `tag`; `"all"` counts everything
    pub fn count_matching(&self, filter: &TagFilter) -> usize {
        self.books.iter().filter(|book| filter.matches(book)).count()
    }

    /// Run the filter/search/sort pipeline
    pub fn query(&self, q: &CatalogQuery) -> Vec<&Book> {
        query(&self.books, q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Book::new(1, "Dog Man", "Dav Pilkey")
                .with_isbn("9781338335482")
                .with_lexile("GN270L")
                .with_tags(["Graphic Novel", "Funny"]),
            Book::new(2, "Frog and Toad Are Friends", "Arnold Lobel")
                .with_lexile("400L")
                .with_tags(["Classic", "Beginner"]),
            Book::new(3, "Where the Wild Things Are", "Maurice Sendak")
                .with_lexile("AD740L")
                .with_tags(["Classic"]),
            Book::new(4, "Elephant and Piggie", "Mo Willems")
                .with_lexile("BR")
                .with_tags(["Funny", "Beginner"]),
            Book::new(5, "Poems to Learn by Heart", "Caroline Kennedy")
                .with_lexile("NP")
                .with_tags(["Poetry"]),
            Book::new(6, "Untagged", "Anonymous"),
        ])
    }

    fn ids(books: &[&Book]) -> Vec<u32> {
        books.iter().map(|b| b.id.get()).collect()
    }

    #[test]
    fn test_all_and_empty_search_returns_everything() {
        let catalog = sample();
        let results = catalog.query(&CatalogQuery::new());
        assert_eq!(ids(&results), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_tag_filter_is_exact_and_case_sensitive() {
        let catalog = sample();
        assert_eq!(ids(&catalog.query(&CatalogQuery::new().with_tag("Funny"))), vec![1, 4]);
        assert!(catalog.query(&CatalogQuery::new().with_tag("funny")).is_empty());
        assert!(catalog.query(&CatalogQuery::new().with_tag("Fun")).is_empty());
    }

    #[test]
    fn test_search_fields() {
        let catalog = sample();
        let by = |text: &str| ids(&catalog.query(&CatalogQuery::new().with_search(text)));
        assert_eq!(by("DOG"), vec![1]);
        assert_eq!(by("lobel"), vec![2]);
        assert_eq!(by("graphic"), vec![1]);
        assert_eq!(by("ad7"), vec![3]);
        assert_eq!(by("   "), vec![1, 2, 3, 4, 5, 6]);
        assert!(by("zzz").is_empty());
    }

    #[test]
    fn test_search_keeps_inner_whitespace() {
        let catalog = sample();
        let results = catalog.query(&CatalogQuery::new().with_search("dog "));
        assert_eq!(ids(&results), vec![1]);
        let results = catalog.query(&CatalogQuery::new().with_search(" dog"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_tag_then_search() {
        let catalog = sample();
        let q = CatalogQuery::new().with_tag("Classic").with_search("wild");
        assert_eq!(ids(&catalog.query(&q)), vec![3]);
    }

    #[test]
    fn test_sort_by_reading_level() {
        let catalog = sample();
        let q = CatalogQuery::new().with_sort(SortMode::ReadingLevel);
        assert_eq!(ids(&catalog.query(&q)), vec![4, 1, 2, 3, 5, 6]);
        // source order is untouched
        assert_eq!(catalog.books()[0].id.get(), 1);
    }

    #[test]
    fn test_br_before_measure() {
        let catalog = Catalog::new(vec![
            Book::new(1, "A", "X").with_lexile("520L"),
            Book::new(2, "B", "Y").with_lexile("BR"),
        ]);
        let q = CatalogQuery::new().with_sort(SortMode::ReadingLevel);
        assert_eq!(ids(&catalog.query(&q)), vec![2, 1]);
    }

    #[test]
    fn test_sort_places_prefixed_and_missing_codes() {
        let catalog = Catalog::new(vec![
            Book::new(1, "A", "X").with_lexile("NP"),
            Book::new(2, "B", "X"),
            Book::new(3, "C", "X").with_lexile("50L"),
            Book::new(4, "D", "X").with_lexile("BR120L"),
            Book::new(5, "E", "X").with_lexile("AD"),
        ]);
        let q = CatalogQuery::new().with_sort(SortMode::ReadingLevel);
        assert_eq!(ids(&catalog.query(&q)), vec![4, 3, 1, 2, 5]);
    }

    #[test]
    fn test_from_reader() {
        let json = br#"[{"id": "8", "title": "El Deafo", "author": "Cece Bell", "lexile": "GN420L", "tags": ["Diverse"]}]"#;
        let catalog = Catalog::from_reader(&json[..]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(BookId::new(8)).unwrap().title, "El Deafo");
        assert!(Catalog::from_reader(&b"{not json"[..]).is_err());
    }

    #[test]
    fn test_all_tags_sorted_unique() {
        assert_eq!(
            sample().all_tags(),
            vec!["Beginner", "Classic", "Funny", "Graphic Novel", "Poetry"]
        );
    }

    #[test]
    fn test_get_and_require() {
        let catalog = sample();
        assert_eq!(catalog.get(BookId::new(3)).unwrap().title, "Where the Wild Things Are");
        assert!(matches!(
            catalog.require(BookId::new(99)),
            Err(CatalogError::BookNotFound(99))
        ));
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("level".parse::<SortMode>().unwrap(), SortMode::ReadingLevel);
        assert_eq!("Lexile".parse::<SortMode>().unwrap(), SortMode::ReadingLevel);
        assert_eq!("none".parse::<SortMode>().unwrap(), SortMode::None);
        assert!("title".parse::<SortMode>().is_err());
        assert_eq!(TagFilter::from("all"), TagFilter::All);
        assert_eq!(TagFilter::from("STEM"), TagFilter::Tag("STEM".into()));
    }
}
