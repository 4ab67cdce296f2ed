// Rust guideline compliant 2026-10-19

//! Implementation of the `lbr search` command.

use crate::OutputFormatter;
use anyhow::Result;
use libris_core::{Book, Inventory};

/// What to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Case-insensitive substring of the title.
    Title(String),
    /// Exact ISBN.
    Isbn(String),
}

/// Searches the inventory.
///
/// An ISBN search yields at most one book. No match is not an error; the
/// formatter renders an empty list.
pub fn execute(
    inventory: &Inventory,
    query: &Query,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let books: Vec<Book> = match query {
        Query::Title(title) => inventory
            .search_by_title(title)
            .into_iter()
            .cloned()
            .collect(),
        Query::Isbn(isbn) => inventory.search_by_isbn(isbn).cloned().into_iter().collect(),
    };

    Ok(formatter.format_list(&books))
}
