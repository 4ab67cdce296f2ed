// Rust guideline compliant 2026-10-19

//! Configuration management for Libris.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "libris.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Parses an output format name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(OutputFormat::Json),
            "table" => Some(OutputFormat::Table),
            "plain" => Some(OutputFormat::Plain),
            _ => None,
        }
    }
}

/// Configuration for Libris behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON data file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Minimum log level (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/books.json")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("logs/library.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/libris.toml`
    /// 3. Environment variables with `LIBRIS_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory holding `libris.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::load_with(config_dir, |key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with<F>(config_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = config_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `LIBRIS_DATA_FILE` - Path to the data file
    /// - `LIBRIS_LOG_FILE` - Path to the log file
    /// - `LIBRIS_LOG_LEVEL` - Log level (error/warn/info/debug)
    /// - `LIBRIS_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Errors
    ///
    /// Returns an error if `LIBRIS_OUTPUT_FORMAT` is not a known format.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("LIBRIS_DATA_FILE") {
            self.data_file = PathBuf::from(val);
        }

        if let Some(val) = lookup("LIBRIS_LOG_FILE") {
            self.log_file = PathBuf::from(val);
        }

        if let Some(val) = lookup("LIBRIS_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Some(val) = lookup("LIBRIS_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val).ok_or_else(|| {
                Error::InvalidConfig(
                    "LIBRIS_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                )
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - data_file is empty
    /// - log_level is not one of error, warn, info, debug
    fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(
                "data_file cannot be empty".to_string(),
            ));
        }

        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" => Ok(()),
            other => Err(Error::InvalidConfig(format!(
                "log_level must be error, warn, info, or debug, got {}",
                other
            ))),
        }
    }

    /// Saves the configuration to `<config_dir>/libris.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("data/books.json"));
        assert_eq!(config.log_file, PathBuf::from("logs/library.log"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_config_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_with(temp_dir.path(), no_env).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
data_file = "shelf/catalog.json"
log_file = "shelf/catalog.log"
log_level = "debug"
output_format = "json"
"#;
        std::fs::write(temp_dir.path().join(CONFIG_FILE), content).unwrap();

        let config = Config::load_with(temp_dir.path(), no_env).unwrap();
        assert_eq!(config.data_file, PathBuf::from("shelf/catalog.json"));
        assert_eq!(config.log_file, PathBuf::from("shelf/catalog.log"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_config_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "log_level = \"warn\"").unwrap();

        let config = Config::load_with(temp_dir.path(), no_env).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.data_file, PathBuf::from("data/books.json"));
    }

    #[test]
    fn test_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "data_file = [").unwrap();

        let result = Config::load_with(temp_dir.path(), no_env);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "log_level = \"loud\"").unwrap();

        let result = Config::load_with(temp_dir.path(), no_env);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_empty_data_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "data_file = \"\"").unwrap();

        let result = Config::load_with(temp_dir.path(), no_env);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_env_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let env = env_from(&[
            ("LIBRIS_DATA_FILE", "/tmp/books.json"),
            ("LIBRIS_LOG_FILE", "/tmp/books.log"),
            ("LIBRIS_LOG_LEVEL", "error"),
            ("LIBRIS_OUTPUT_FORMAT", "plain"),
        ]);

        let config = Config::load_with(temp_dir.path(), env).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/books.json"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/books.log"));
        assert_eq!(config.log_level, "error");
        assert_eq!(config.output_format, OutputFormat::Plain);
    }

    #[test]
    fn test_config_env_invalid_format() {
        let temp_dir = TempDir::new().unwrap();
        let env = env_from(&[("LIBRIS_OUTPUT_FORMAT", "invalid")]);

        let result = Config::load_with(temp_dir.path(), env);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "log_level = \"debug\"").unwrap();
        let env = env_from(&[("LIBRIS_LOG_LEVEL", "warn")]);

        let config = Config::load_with(temp_dir.path(), env).unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            data_file: PathBuf::from("library/books.json"),
            log_file: PathBuf::from("library/library.log"),
            log_level: "debug".to_string(),
            output_format: OutputFormat::Json,
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load_with(temp_dir.path(), no_env).unwrap();

        assert_eq!(original, loaded);
    }
}
