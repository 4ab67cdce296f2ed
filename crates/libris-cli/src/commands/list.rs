// Rust guideline compliant 2026-10-19

//! Implementation of the `lbr list` command.

use crate::OutputFormatter;
use anyhow::Result;
use libris_core::{Inventory, Status};

/// Lists books in inventory order, optionally restricted to one status.
pub fn execute(
    inventory: &Inventory,
    status: Option<Status>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let mut books = inventory.list_all();
    if let Some(status) = status {
        books.retain(|book| book.status() == status);
    }

    Ok(formatter.format_list(&books))
}
