//! Core types for the reading list catalog

mod book;
mod lexile;

pub use book::{Book, BookId, RecordId};
pub use lexile::{level_digits, level_value, sort_key, LexileCode, LEVEL_CEILING, LEVEL_FLOOR};
