// Rust guideline compliant 2026-10-19

//! Implementation of the `lbr remove` command.

use crate::OutputFormatter;
use anyhow::Result;
use libris_core::Inventory;

/// Removes a book by ISBN.
///
/// # Errors
///
/// Returns an error if no book has the ISBN.
pub fn execute(
    inventory: &mut Inventory,
    isbn: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    if !inventory.remove_book(isbn) {
        anyhow::bail!("Could not remove {}: not found", isbn.trim());
    }

    Ok(formatter.format_message(&format!("Removed book {}", isbn.trim())))
}
