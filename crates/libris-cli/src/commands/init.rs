// Rust guideline compliant 2026-10-19

//! Implementation of the `lbr init` command.
//!
//! Writes a default `libris.toml` and creates the data file it points to.

use crate::OutputFormatter;
use anyhow::Result;
use libris_core::{config::CONFIG_FILE, Config, Inventory, StoreHealth};
use std::path::Path;

/// Initializes a Libris workspace in `config_dir`.
///
/// An existing `libris.toml` is left untouched. The inventory is opened
/// once so its directory and empty data file exist afterwards.
///
/// # Errors
///
/// Returns an error if:
/// - The config directory or file cannot be written
/// - The data file could not be prepared
pub fn execute(
    config_dir: &Path,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    std::fs::create_dir_all(config_dir)?;

    let config_path = config_dir.join(CONFIG_FILE);
    let created_config = !config_path.exists();
    if created_config {
        config.save(config_dir)?;
    }

    let inventory = Inventory::with_tracing(&config.data_file);
    if let StoreHealth::Degraded(reason) = inventory.health() {
        anyhow::bail!(
            "Data file {} is not usable: {}",
            config.data_file.display(),
            reason
        );
    }

    let mut message = format!(
        "Libris initialized with {} books at {}",
        inventory.len(),
        inventory.path().display()
    );
    if created_config {
        message.push_str(&format!("\n  - Created {}", config_path.display()));
    }

    Ok(formatter.format_message(&message))
}
