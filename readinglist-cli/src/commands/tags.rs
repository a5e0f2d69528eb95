//! Tags command implementation

use super::load_catalog;
use anyhow::Result;
use readinglist_core::{TagFilter, QUICK_FILTERS};
use std::path::Path;

/// List quick filters, or every tag, with how many books each selects
pub fn tags(data: &Path, all: bool) -> Result<()> {
    let catalog = load_catalog(data)?;

    if all {
        for tag in catalog.all_tags() {
            let count = catalog.count_matching(&TagFilter::from(tag));
            println!("{:<24} {}", tag, count);
        }
        return Ok(());
    }

    for filter in QUICK_FILTERS {
        let count = catalog.count_matching(&filter.tag_filter());
        let marker = if filter.highlight { "*" } else { " " };
        println!("{} {} {:<22} {}", marker, filter.icon, filter.label, count);
    }

    Ok(())
}
