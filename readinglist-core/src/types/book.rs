//! The Book record - one entry of the static dataset

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw id as it appears in a dataset record.
///
/// The dataset stores ids either as JSON numbers or as numeric strings, so
/// both forms are accepted. Two ids are only equal when both the form and the
/// value agree (`5` and `"5"` are different records).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Whether the id counts as missing (zero or an empty string)
    pub fn is_blank(&self) -> bool {
        match self {
            RecordId::Number(n) => *n == 0,
            RecordId::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Stable, positive identity of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RecordId", into = "u32")]
pub struct BookId(u32);

impl BookId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<RecordId> for BookId {
    type Error = CatalogError;

    fn try_from(raw: RecordId) -> Result<Self, Self::Error> {
        let value = match &raw {
            RecordId::Number(n) => u32::try_from(*n).ok(),
            RecordId::Text(s) => s.trim().parse::<u32>().ok(),
        };
        match value {
            Some(id) if id > 0 => Ok(Self(id)),
            _ => Err(CatalogError::InvalidId(raw.to_string())),
        }
    }
}

impl From<BookId> for u32 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier
    pub id: BookId,

    /// Book title
    pub title: String,

    /// Author name(s) as a single display string
    pub author: String,

    /// ISBN-13, used for retail and cover lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// Lexile code such as `430L`, `BR`, `AD520L`, `GN270L` or `NP`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexile: Option<String>,

    /// Classification labels, in display order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Short blurb
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Local cover image path, preferred over remote cover lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl Book {
    /// Create a book with the required fields
    pub fn new(id: u32, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: BookId::new(id),
            title: title.into(),
            author: author.into(),
            isbn: None,
            lexile: None,
            tags: Vec::new(),
            description: None,
            cover_image: None,
        }
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_lexile(mut self, lexile: impl Into<String>) -> Self {
        self.lexile = Some(lexile.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_cover_image(mut self, path: impl Into<String>) -> Self {
        self.cover_image = Some(path.into());
        self
    }

    /// ISBN, treating an empty string as absent
    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref().filter(|s| !s.is_empty())
    }

    /// Lexile code, treating an empty string as absent
    pub fn lexile(&self) -> Option<&str> {
        self.lexile.as_deref().filter(|s| !s.is_empty())
    }

    /// Local cover path, treating an empty string as absent
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref().filter(|s| !s.is_empty())
    }

    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// `"<title> <author>"`, the query term for catalog searches
    pub fn title_author(&self) -> String {
        format!("{} {}", self.title, self.author)
    }
}
