//! Search command implementation

use super::{load_catalog, render};
use anyhow::Result;
use readinglist_core::{BookCard, BrowseState, SortMode};
use std::path::Path;

/// Run a catalog query and print the matching books
pub fn search(data: &Path, tag: &str, query: &str, sort: SortMode, json: bool) -> Result<()> {
    let catalog = load_catalog(data)?;

    let mut state = BrowseState::new();
    state.select_filter(tag);
    state.set_search(query);
    state.sort_mode = sort;

    let results = state.results(&catalog);
    tracing::debug!(
        tag = %state.tag_filter,
        query = %state.search_text,
        sort = %state.sort_mode,
        matches = results.len(),
        "search finished"
    );

    let cards: Vec<BookCard> = results.into_iter().map(BookCard::new).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    println!("{}", state.summary(cards.len()));
    if cards.is_empty() {
        println!();
        println!("No books found");
        println!("Try a different search term or filter");
        return Ok(());
    }
    for card in &cards {
        println!();
        render::print_card_summary(card);
    }

    Ok(())
}
