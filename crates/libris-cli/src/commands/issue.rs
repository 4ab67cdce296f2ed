// Rust guideline compliant 2026-10-19

//! Implementation of the `lbr issue` command.

use crate::OutputFormatter;
use anyhow::Result;
use libris_core::Inventory;

/// Issues a book by ISBN.
///
/// # Errors
///
/// Returns an error if the book does not exist or is already issued.
pub fn execute(
    inventory: &mut Inventory,
    isbn: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    if !inventory.issue_book(isbn) {
        anyhow::bail!("Could not issue {}: not found or already issued", isbn.trim());
    }

    Ok(formatter.format_message(&format!("Issued book {}", isbn.trim())))
}
