//! Dataset validation for maintainers
//!
//! Validation runs offline against the raw dataset, so records are parsed
//! leniently: every field is optional and nothing here is used by the catalog
//! at runtime. Hard errors (missing required fields, duplicate ids) fail the
//! run; warnings are advisory.

use crate::error::Result;
use crate::types::RecordId;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

fn isbn_pattern() -> &'static Regex {
    static ISBN: OnceLock<Regex> = OnceLock::new();
    ISBN.get_or_init(|| Regex::new(r"^97[89]\d{10}$").expect("ISBN pattern is valid"))
}

/// Whether `isbn` is a 13-digit ISBN with a 978/979 prefix
pub fn is_valid_isbn(isbn: &str) -> bool {
    isbn_pattern().is_match(isbn)
}

/// A dataset record with every field optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookRecord {
    pub id: Option<RecordId>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub lexile: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl BookRecord {
    fn present(field: &Option<String>) -> Option<&str> {
        field.as_deref().filter(|s| !s.is_empty())
    }

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref().filter(|id| !id.is_blank())
    }

    /// `Book #<id>: "<title>"`, used to prefix per-record findings
    fn reference(&self) -> String {
        let id = self.id().map(ToString::to_string);
        format!(
            "Book #{}: \"{}\"",
            id.as_deref().unwrap_or("?"),
            self.title.as_deref().unwrap_or("?")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// What a finding is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    MissingId,
    MissingTitle,
    MissingAuthor,
    DuplicateId { id: String },
    MissingIsbn,
    MissingLexile,
    NoTags,
    InvalidIsbn { isbn: String },
    DuplicateTitle { title: String, count: usize },
}

impl IssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::MissingId
            | IssueKind::MissingTitle
            | IssueKind::MissingAuthor
            | IssueKind::DuplicateId { .. } => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::MissingId => f.write_str("Missing ID"),
            IssueKind::MissingTitle => f.write_str("Missing title"),
            IssueKind::MissingAuthor => f.write_str("Missing author"),
            IssueKind::DuplicateId { id } => write!(f, "Duplicate ID: {}", id),
            IssueKind::MissingIsbn => f.write_str("Missing ISBN (no cover will show)"),
            IssueKind::MissingLexile => f.write_str("Missing Lexile level"),
            IssueKind::NoTags => f.write_str("No tags"),
            IssueKind::InvalidIsbn { isbn } => write!(f, "Invalid ISBN format: {}", isbn),
            IssueKind::DuplicateTitle { title, count } => {
                write!(f, "Duplicate title found {} times: \"{}\"", count, title)
            }
        }
    }
}

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Record reference, absent for collection-wide findings
    pub record: Option<String>,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl Issue {
    fn for_record(record: &BookRecord, kind: IssueKind) -> Self {
        Self {
            record: Some(record.reference()),
            kind,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record {
            Some(record) => write!(f, "{} - {}", record, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// How many records carry a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Result of validating a dataset
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub total: usize,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    /// Sorted by count descending, ties in first-seen order
    pub tag_stats: Vec<TagCount>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the run should fail; strict mode fails on warnings too
    pub fn is_failure(&self, strict: bool) -> bool {
        self.has_errors() || (strict && !self.warnings.is_empty())
    }

    fn push(&mut self, issue: Issue) {
        match issue.severity() {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }
}

/// Parse a JSON array leniently and validate it
pub fn validate_json(json: &str) -> Result<ValidationReport> {
    let records: Vec<BookRecord> = serde_json::from_str(json)?;
    Ok(validate_dataset(&records))
}

/// Check every record and collect findings and tag statistics
pub fn validate_dataset(records: &[BookRecord]) -> ValidationReport {
    let mut report = ValidationReport {
        total: records.len(),
        ..Default::default()
    };

    let mut id_counts: HashMap<&RecordId, usize> = HashMap::new();
    for id in records.iter().filter_map(BookRecord::id) {
        *id_counts.entry(id).or_default() += 1;
    }

    for record in records {
        if record.id().is_none() {
            report.push(Issue::for_record(record, IssueKind::MissingId));
        }
        if BookRecord::present(&record.title).is_none() {
            report.push(Issue::for_record(record, IssueKind::MissingTitle));
        }
        if BookRecord::present(&record.author).is_none() {
            report.push(Issue::for_record(record, IssueKind::MissingAuthor));
        }

        let isbn = BookRecord::present(&record.isbn);
        if isbn.is_none() {
            report.push(Issue::for_record(record, IssueKind::MissingIsbn));
        }
        if BookRecord::present(&record.lexile).is_none() {
            report.push(Issue::for_record(record, IssueKind::MissingLexile));
        }
        if record.tags.as_ref().map_or(true, Vec::is_empty) {
            report.push(Issue::for_record(record, IssueKind::NoTags));
        }
        if let Some(isbn) = isbn.filter(|isbn| !is_valid_isbn(isbn)) {
            report.push(Issue::for_record(
                record,
                IssueKind::InvalidIsbn {
                    isbn: isbn.to_string(),
                },
            ));
        }

        if let Some(id) = record.id() {
            if id_counts.get(id).copied().unwrap_or(0) > 1 {
                report.push(Issue::for_record(
                    record,
                    IssueKind::DuplicateId { id: id.to_string() },
                ));
            }
        }
    }

    // Titles compare case-insensitively after trimming; first-seen order
    let mut title_order: Vec<String> = Vec::new();
    let mut title_counts: HashMap<String, usize> = HashMap::new();
    for title in records.iter().filter_map(|r| r.title.as_deref()) {
        let key = title.trim().to_lowercase();
        let count = title_counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            title_order.push(key);
        }
        *count += 1;
    }
    for title in title_order {
        let count = title_counts[&title];
        if count > 1 {
            report.push(Issue {
                record: None,
                kind: IssueKind::DuplicateTitle { title, count },
            });
        }
    }

    report.tag_stats = tag_statistics(records);
    report
}

fn tag_statistics(records: &[BookRecord]) -> Vec<TagCount> {
    let mut stats: Vec<TagCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for tag in records.iter().flat_map(|r| r.tags.iter().flatten()) {
        match index.get(tag.as_str()) {
            Some(&i) => stats[i].count += 1,
            None => {
                index.insert(tag.as_str(), stats.len());
                stats.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                });
            }
        }
    }
    // stable: equal counts keep first-seen order
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}
