//! Validate command implementation

use anyhow::{bail, Context, Result};
use readinglist_core::validate::validate_json;
use readinglist_core::ValidationReport;
use std::path::Path;

/// Warnings printed before the list is cut short
const WARNING_DISPLAY_LIMIT: usize = 20;

/// Validate the books dataset and print a report
pub fn validate(data: &Path, strict: bool, json: bool) -> Result<()> {
    let contents = std::fs::read_to_string(data)
        .with_context(|| format!("Failed to open dataset: {}", data.display()))?;
    let report = validate_json(&contents)
        .with_context(|| format!("Failed to parse dataset: {}", data.display()))?;

    tracing::debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validation finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.is_failure(strict) {
        if report.has_errors() {
            bail!(
                "Validation failed for {}: {} error(s)",
                data.display(),
                report.errors.len()
            );
        }
        bail!(
            "Validation failed for {}: {} warning(s) in strict mode",
            data.display(),
            report.warnings.len()
        );
    }

    Ok(())
}

fn print_report(report: &ValidationReport) {
    let rule = "=".repeat(60);
    println!("Books Data Validation Report");
    println!("{}", rule);
    println!("Total books: {}", report.total);
    println!();

    if report.errors.is_empty() {
        println!("No critical errors found!");
    } else {
        println!("ERRORS ({}):", report.errors.len());
        for error in &report.errors {
            println!("  - {}", error);
        }
    }
    println!();

    if report.warnings.is_empty() {
        println!("No warnings!");
    } else {
        println!("WARNINGS ({}):", report.warnings.len());
        for warning in report.warnings.iter().take(WARNING_DISPLAY_LIMIT) {
            println!("  - {}", warning);
        }
        if report.warnings.len() > WARNING_DISPLAY_LIMIT {
            println!(
                "  ... and {} more warnings",
                report.warnings.len() - WARNING_DISPLAY_LIMIT
            );
        }
    }

    println!();
    println!("{}", rule);
    println!();
    println!("TAG STATISTICS:");
    for stat in &report.tag_stats {
        println!("  {}: {} books", stat.tag, stat.count);
    }
}
