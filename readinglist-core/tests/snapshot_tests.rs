//! Snapshot tests for readinglist-core using insta
//!
//! These capture user-facing text (reading-level explanations and outbound
//! links) so wording changes show up in review.

use readinglist_core::{explain, Book, LevelExplanation, LinkTarget};
use serde::Serialize;

#[derive(Serialize)]
struct Row<'a> {
    code: &'a str,
    explanation: Option<LevelExplanation>,
}

#[test]
fn test_lexile_explanations() {
    let codes = ["BR", "AD320L", "AD540L", "GN270L", "GN480L", "150L", "330L", "520L", "860L", "NP"];
    let rows: Vec<Row> = codes
        .iter()
        .map(|&code| Row {
            code,
            explanation: explain(Some(code)),
        })
        .collect();
    insta::assert_json_snapshot!("lexile_explanations", rows);
}

#[test]
fn test_outbound_links() {
    let books = [
        Book::new(1, "Dog Man", "Dav Pilkey").with_isbn("9781338335482"),
        Book::new(2, "Ada Twist, Scientist", "Andrea Beaty"),
    ];
    let mut lines = Vec::new();
    for book in &books {
        for target in LinkTarget::ALL {
            lines.push(format!("{} | {}: {}", book.title, target.label(), target.url_for(book)));
        }
    }
    insta::assert_snapshot!("outbound_links", lines.join("\n"));
}
