//! Reading List CLI - browse and validate the children's book catalog

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use readinglist_core::SortMode;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dataset used when neither --data nor READINGLIST_DATA is set
const DEFAULT_DATA_PATH: &str = "data/books.json";

/// Parse and validate a book id argument (must be positive)
fn parse_book_id(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| format!("'{}' is not a valid book id", s))?;
    if n < 1 {
        Err("book id must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "readinglist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the books dataset (JSON)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog by tag and text
    Search {
        /// Only books with this exact tag ("all" for every book)
        #[arg(short, long, default_value = "all")]
        tag: String,

        /// Text matched against title, author, tags and lexile code
        #[arg(short, long, default_value = "")]
        query: String,

        /// Result order (none, level)
        #[arg(short, long, default_value = "none")]
        sort: SortMode,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one book with its reading level, covers and links
    Show {
        /// Book id
        #[arg(value_parser = parse_book_id)]
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List quick filters and tags with book counts
    Tags {
        /// List every distinct tag instead of the quick filters
        #[arg(long)]
        all: bool,
    },

    /// Validate the books dataset
    Validate {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Resolve the dataset path: flag, then environment, then the default
fn data_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("READINGLIST_DATA").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "readinglist_cli=debug,readinglist_core=debug"
    } else {
        "readinglist_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data = data_path(cli.data);

    match cli.command {
        Commands::Search {
            tag,
            query,
            sort,
            json,
        } => commands::search(&data, &tag, &query, sort, json),

        Commands::Show { id, json } => commands::show(&data, id, json),

        Commands::Tags { all } => commands::tags(&data, all),

        Commands::Validate { strict, json } => commands::validate(&data, strict, json),
    }
}
