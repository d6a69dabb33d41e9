//! TOML configuration file support.
//!
//! ```toml
//! # raw2sqlite.toml
//! [output]
//! extension = "sqlite"
//!
//! [store]
//! journal_mode = "memory"
//! synchronous = "off"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use raw2sqlite::store::StoreConfig;

/// Root configuration structure for raw2sqlite.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output naming.
    #[serde(default)]
    pub output: OutputConfig,

    /// SQLite store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

/// Configuration of the output path.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Extension given to INPUT when no output path is passed.
    pub extension: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raw2sqlite::store::{JournalMode, Synchronous};

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [output]
            extension = "db"

            [store]
            journal_mode = "wal"
            synchronous = "normal"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.output.extension.as_deref(), Some("db"));
        assert_eq!(config.store.journal_mode, JournalMode::Wal);
        assert_eq!(config.store.synchronous, Synchronous::Normal);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [store]
            synchronous = "full"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.output.extension, None);
        assert_eq!(config.store.journal_mode, JournalMode::Memory);
        assert_eq!(config.store.synchronous, Synchronous::Full);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_invalid_journal_mode() {
        let toml = r#"
            [store]
            journal_mode = "fast"
        "#;
        assert!(Config::from_str(toml).is_err());
    }
}
