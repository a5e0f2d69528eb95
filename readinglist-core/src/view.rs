//! Presentation state and per-book view models
//!
//! [`BrowseState`] is what a front end holds between user events. It never
//! feeds the pipeline directly: every render goes through [`BrowseState::to_query`],
//! which turns it into an explicit [`CatalogQuery`].

use crate::catalog::{Catalog, CatalogQuery, SortMode, TagFilter};
use crate::cover::CoverChain;
use crate::links::LinkTarget;
use crate::reading_level::{explain, LevelExplanation};
use crate::types::{Book, BookId};
use serde::Serialize;

/// A one-click tag filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickFilter {
    /// Tag to filter on, or `"all"`
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Curated lists are shown with emphasis
    pub highlight: bool,
}

impl QuickFilter {
    const fn new(id: &'static str, label: &'static str, icon: &'static str, highlight: bool) -> Self {
        Self {
            id,
            label,
            icon,
            highlight,
        }
    }

    pub fn tag_filter(&self) -> TagFilter {
        TagFilter::from(self.id)
    }

    pub fn find(id: &str) -> Option<&'static QuickFilter> {
        QUICK_FILTERS.iter().find(|f| f.id == id)
    }
}

pub const QUICK_FILTERS: &[QuickFilter] = &[
    QuickFilter::new("all", "All Books", "📚", false),
    QuickFilter::new("MV Library", "MV Library List", "🏛️", true),
    QuickFilter::new("K-12 Reading List", "K-12 Reading List", "📋", true),
    QuickFilter::new("Mathical", "Mathical Award", "🏆", true),
    QuickFilter::new("Graphic Novel", "Graphic Novels", "💬", false),
    QuickFilter::new("Modern", "Modern", "✨", false),
    QuickFilter::new("Chapter Book", "Chapter Books", "📖", false),
    QuickFilter::new("Funny", "Funny", "😂", false),
    QuickFilter::new("Classic", "Classics", "🌟", false),
    QuickFilter::new("Diverse", "Diverse", "🌍", false),
    QuickFilter::new("STEM", "STEM", "🔬", false),
    QuickFilter::new("Beginner", "Beginner", "🌱", false),
];

/// Query parameters and layout flags held by the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    pub tag_filter: TagFilter,
    pub search_text: String,
    pub sort_mode: SortMode,
    /// Filter panel visibility on small screens
    pub filters_expanded: bool,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            tag_filter: TagFilter::All,
            search_text: String::new(),
            sort_mode: SortMode::None,
            filters_expanded: true,
        }
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a quick filter. Picking a filter clears the search box.
    pub fn select_filter(&mut self, filter: impl Into<TagFilter>) {
        self.tag_filter = filter.into();
        self.search_text.clear();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn toggle_sort(&mut self) {
        self.sort_mode = self.sort_mode.toggled();
    }

    pub fn toggle_filters(&mut self) {
        self.filters_expanded = !self.filters_expanded;
    }

    pub fn to_query(&self) -> CatalogQuery {
        CatalogQuery {
            tag_filter: self.tag_filter.clone(),
            search_text: self.search_text.clone(),
            sort_mode: self.sort_mode,
        }
    }

    pub fn results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Book> {
        catalog.query(&self.to_query())
    }

    fn is_narrowed(&self) -> bool {
        !self.tag_filter.is_all() || !self.search_text.is_empty()
    }

    /// Result count line shown above the list
    pub fn summary(&self, count: usize) -> String {
        if self.is_narrowed() {
            let noun = if count == 1 { "book" } else { "books" };
            format!("Showing {} {}", count, noun)
        } else {
            format!("{} books in collection", count)
        }
    }

    /// Caption of the collapsed filter panel
    pub fn filter_caption(&self) -> String {
        match &self.tag_filter {
            TagFilter::All => "Filters & Sort".to_string(),
            TagFilter::Tag(tag) => {
                let label = QuickFilter::find(tag).map_or(tag.as_str(), |f| f.label);
                format!("Filter: {}", label)
            }
        }
    }
}

/// Lexile badge with its explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexileBadge {
    pub code: String,
    pub explanation: LevelExplanation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub target: LinkTarget,
    pub label: &'static str,
    pub url: String,
}

/// Everything needed to render one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCard {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub lexile: Option<LexileBadge>,
    pub cover: CoverChain,
    pub links: Vec<CardLink>,
}

impl BookCard {
    pub fn new(book: &Book) -> Self {
        let lexile = book.lexile().and_then(|code| {
            explain(Some(code)).map(|explanation| LexileBadge {
                code: code.to_string(),
                explanation,
            })
        });
        let links = LinkTarget::ALL
            .iter()
            .map(|&target| CardLink {
                target,
                label: target.label(),
                url: target.url_for(book),
            })
            .collect();

        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            tags: book.tags.clone(),
            lexile,
            cover: CoverChain::for_book(book),
            links,
        }
    }
}
