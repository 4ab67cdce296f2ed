// Rust guideline compliant 2026-10-19

//! Implementation of the `lbr return` command.

use crate::OutputFormatter;
use anyhow::Result;
use libris_core::Inventory;

/// Returns an issued book by ISBN.
///
/// # Errors
///
/// Returns an error if the book does not exist or is not issued.
pub fn execute(
    inventory: &mut Inventory,
    isbn: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    if !inventory.return_book(isbn) {
        anyhow::bail!("Could not return {}: not found or not issued", isbn.trim());
    }

    Ok(formatter.format_message(&format!("Returned book {}", isbn.trim())))
}
