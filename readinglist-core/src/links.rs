//! Outbound search links for retail and library catalogs
//!
//! Every generator is a pure function of the book: no I/O happens here, the
//! caller decides whether to open the URL.

use crate::types::Book;
use serde::{Deserialize, Serialize};

const AMAZON_SEARCH: &str = "https://www.amazon.com/s?k=";
const MOUNTAIN_VIEW_SEARCH: &str = "https://librarycatalog.mountainview.gov/search?query=";
const LOS_ALTOS_SEARCH: &str = "https://sccl.bibliocommons.com/v2/search?query=";

/// Amazon search. Uses the ISBN when present, otherwise title and author.
pub fn amazon_link(book: &Book) -> String {
    let term = match book.isbn() {
        Some(isbn) => isbn.to_string(),
        None => book.title_author(),
    };
    format!("{}{}", AMAZON_SEARCH, urlencoding::encode(&term))
}

/// Mountain View Public Library catalog search by title and author
pub fn mountain_view_library_link(book: &Book) -> String {
    format!(
        "{}{}",
        MOUNTAIN_VIEW_SEARCH,
        urlencoding::encode(&book.title_author())
    )
}

/// Los Altos Library search (Santa Clara County Library District, Bibliocommons)
pub fn los_altos_library_link(book: &Book) -> String {
    format!(
        "{}{}&searchType=smart",
        LOS_ALTOS_SEARCH,
        urlencoding::encode(&book.title_author())
    )
}

/// Link destinations, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    Amazon,
    MountainView,
    LosAltos,
}

impl LinkTarget {
    pub const ALL: [LinkTarget; 3] = [
        LinkTarget::Amazon,
        LinkTarget::MountainView,
        LinkTarget::LosAltos,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LinkTarget::Amazon => "Amazon",
            LinkTarget::MountainView => "Mountain View",
            LinkTarget::LosAltos => "Los Altos",
        }
    }

    pub fn host(self) -> &'static str {
        match self {
            LinkTarget::Amazon => "www.amazon.com",
            LinkTarget::MountainView => "librarycatalog.mountainview.gov",
            LinkTarget::LosAltos => "sccl.bibliocommons.com",
        }
    }

    pub fn url_for(self, book: &Book) -> String {
        match self {
            LinkTarget::Amazon => amazon_link(book),
            LinkTarget::MountainView => mountain_view_library_link(book),
            LinkTarget::LosAltos => los_altos_library_link(book),
        }
    }
}
