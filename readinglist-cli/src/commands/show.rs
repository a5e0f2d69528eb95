//! Show command implementation

use super::{load_catalog, render};
use anyhow::Result;
use readinglist_core::{BookCard, BookId};
use std::path::Path;

/// Display one book in full
pub fn show(data: &Path, id: u32, json: bool) -> Result<()> {
    let catalog = load_catalog(data)?;
    let book = catalog.require(BookId::new(id))?;
    let card = BookCard::new(book);

    if json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        render::print_card_detail(&card);
    }

    Ok(())
}
