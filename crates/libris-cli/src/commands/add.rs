// Rust guideline compliant 2026-10-19

//! Implementation of the `lbr add` command.

use crate::OutputFormatter;
use anyhow::Result;
use libris_core::{Book, Inventory};

/// Adds a new book to the inventory.
///
/// # Arguments
///
/// * `inventory` - The open inventory
/// * `title` - Book title
/// * `author` - Book author
/// * `isbn` - Book ISBN
/// * `formatter` - Output formatter
///
/// # Returns
///
/// The formatted confirmation.
///
/// # Errors
///
/// Returns an error if a book with the same ISBN already exists.
pub fn execute(
    inventory: &mut Inventory,
    title: &str,
    author: &str,
    isbn: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let book = Book::new(title, author, isbn);
    let summary = book.to_string();
    inventory.add_book(book)?;

    Ok(formatter.format_message(&format!("Added book: {}", summary)))
}
