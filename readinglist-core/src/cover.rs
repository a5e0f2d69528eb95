//! Cover image resolution as an explicit fallback sequence
//!
//! A book's cover candidates are tried in order: local image, Open Library,
//! Google Books, then a generated placeholder. The presentation layer reports
//! each load failure with [`CoverChain::advance`]; the chain never runs out,
//! it stays on the placeholder once it gets there.

use crate::types::Book;
use serde::{Deserialize, Serialize};

/// Longest title prefix embedded in the placeholder graphic
const PLACEHOLDER_TITLE_CHARS: usize = 30;

/// One place a cover can come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CoverSource {
    /// Image shipped with the dataset
    Local { path: String },

    /// Open Library covers API
    OpenLibrary { isbn: String },

    /// Google Books thumbnail
    GoogleBooks { isbn: String },

    /// Inline SVG with the book title
    Placeholder { title: String },
}

impl CoverSource {
    /// Image URL (or data URI) for this source
    pub fn url(&self) -> String {
        match self {
            CoverSource::Local { path } => path.clone(),
            CoverSource::OpenLibrary { isbn } => {
                format!("https://covers.openlibrary.org/b/isbn/{}-M.jpg", isbn)
            }
            CoverSource::GoogleBooks { isbn } => format!(
                "https://books.google.com/books/content?id=&printsec=frontcover&img=1&zoom=1&edge=curl&source=gbs_api&isbn={}",
                isbn
            ),
            CoverSource::Placeholder { title } => placeholder_data_uri(title),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CoverSource::Placeholder { .. })
    }
}

/// 120x180 SVG card showing a book emoji and the start of the title
pub fn placeholder_svg(title: &str) -> String {
    let short: String = title.chars().take(PLACEHOLDER_TITLE_CHARS).collect();
    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="180" viewBox="0 0 120 180">"##,
            r##"<rect fill="#e2e8f0" width="120" height="180"/>"##,
            r##"<text x="50%" y="40%" font-family="Arial" font-size="40" fill="#9ca3af" text-anchor="middle" dominant-baseline="middle">📚</text>"##,
            r##"<text x="50%" y="65%" font-family="Arial" font-size="10" fill="#6b7280" text-anchor="middle" dominant-baseline="middle">{}</text>"##,
            "</svg>"
        ),
        escape_xml(&short)
    )
}

/// Placeholder as a percent-encoded `data:` URI
pub fn placeholder_data_uri(title: &str) -> String {
    format!(
        "data:image/svg+xml,{}",
        urlencoding::encode(&placeholder_svg(title))
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Ordered cover candidates for one book plus the current position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverChain {
    candidates: Vec<CoverSource>,
    position: usize,
}

impl CoverChain {
    pub fn for_book(book: &Book) -> Self {
        let mut candidates = Vec::with_capacity(4);
        if let Some(path) = book.cover_image() {
            candidates.push(CoverSource::Local {
                path: path.to_string(),
            });
        }
        if let Some(isbn) = book.isbn() {
            candidates.push(CoverSource::OpenLibrary {
                isbn: isbn.to_string(),
            });
            candidates.push(CoverSource::GoogleBooks {
                isbn: isbn.to_string(),
            });
        }
        candidates.push(CoverSource::Placeholder {
            title: book.title.clone(),
        });

        Self {
            candidates,
            position: 0,
        }
    }

    /// Source that should be displayed now
    pub fn current(&self) -> &CoverSource {
        &self.candidates[self.position]
    }

    /// Record a load failure of the current source and move on.
    /// Returns the new current source.
    pub fn advance(&mut self) -> &CoverSource {
        if self.position + 1 < self.candidates.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Whether the placeholder has been reached
    pub fn is_exhausted(&self) -> bool {
        self.current().is_placeholder()
    }

    pub fn candidates(&self) -> &[CoverSource] {
        &self.candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_chain_order() {
        let book = Book::new(1, "Dog Man", "Dav Pilkey")
            .with_isbn("9781338335482")
            .with_cover_image("/covers/dog-man.jpg");
        let mut chain = CoverChain::for_book(&book);

        assert_eq!(chain.current().url(), "/covers/dog-man.jpg");
        assert_eq!(
            chain.advance().url(),
            "https://covers.openlibrary.org/b/isbn/9781338335482-M.jpg"
        );
        assert!(chain.advance().url().starts_with("https://books.google.com/"));
        assert!(chain.advance().is_placeholder());
        // further failures keep the placeholder
        assert!(chain.advance().is_placeholder());
        assert!(chain.is_exhausted());
    }

    #[test]
    fn test_no_isbn_no_local_is_placeholder_only() {
        let chain = CoverChain::for_book(&Book::new(2, "Untitled", "Someone"));
        assert_eq!(chain.candidates().len(), 1);
        assert!(chain.is_exhausted());
    }

    #[test]
    fn test_local_only_skips_remote() {
        let book = Book::new(3, "Local", "Author").with_cover_image("/covers/local.jpg");
        let mut chain = CoverChain::for_book(&book);
        assert!(matches!(chain.current(), CoverSource::Local { .. }));
        assert!(chain.advance().is_placeholder());
    }

    #[test]
    fn test_placeholder_truncates_and_escapes_title() {
        let svg = placeholder_svg("Frog & Toad: A Very Long Title That Keeps Going");
        assert!(svg.contains(">Frog &amp; Toad: A Very Long Title</text>"));
        let uri = placeholder_data_uri("Dog Man");
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(uri.contains("Dog%20Man"));
    }
}
