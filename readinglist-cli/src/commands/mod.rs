//! CLI command implementations

mod render;
mod search;
mod show;
mod tags;
mod validate;

pub use search::search;
pub use show::show;
pub use tags::tags;
pub use validate::validate;

use anyhow::{Context, Result};
use readinglist_core::Catalog;
use std::path::Path;

/// Load the catalog, naming the file on failure
fn load_catalog(data: &Path) -> Result<Catalog> {
    Catalog::load(data).with_context(|| format!("Failed to load dataset: {}", data.display()))
}
