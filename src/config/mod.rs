//! Configuration module for mediashelf
//!
//! Holds the static server that serves cover images, the ranking key used
//! when none is given and the default verbosity. Settings are read from a
//! TOML file in the user's config directory, with `MEDIASHELF_*` environment
//! variables taking precedence. Nothing in the library reads configuration
//! implicitly: callers pass the values they need (for example
//! [`ShelfConfig::cover_base`]).

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::media::CoverBase;
use crate::sorting::RankingKey;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ShelfConfig {
    /// Base URL of the server hosting cover images
    pub static_server: String,

    /// Ranking key used when a command is not given one
    pub default_order: RankingKey,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl ShelfConfig {
    /// Cover locator base derived from `static_server`
    #[must_use]
    pub fn cover_base(&self) -> CoverBase {
        CoverBase::new(self.static_server.as_str())
    }

    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("mediashelf").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; environment overrides still apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path` plus `MEDIASHELF_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("MEDIASHELF"))
            .build()?;

        settings.try_deserialize()
    }

    /// Parse configuration from TOML text, ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text is not valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::{BaseKey, ComicKey};
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.default_order, RankingKey::default());
        assert!(config.static_server.is_empty());
        assert!(!config.quiet);
        assert_eq!(config.cover_base(), CoverBase::default());
    }

    #[test]
    fn test_from_toml_str() {
        let config = ShelfConfig::from_toml_str(
            r#"
            static_server = "http://nas.local:8000/"
            default_order = "SizePerPage"
            quiet = true
            "#,
        )
        .unwrap();
        assert_eq!(config.default_order, RankingKey::Comic(ComicKey::SizePerPage));
        assert_eq!(config.cover_base().as_str(), "http://nas.local:8000");
        assert!(config.quiet);
    }

    #[test]
    fn test_unknown_order_key_rejected() {
        assert!(ShelfConfig::from_toml_str(r#"default_order = "colour""#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "static_server = \"http://static\"\ndefault_order = \"view-date\"\n").unwrap();

        let config = ShelfConfig::load_from(&path).unwrap();
        assert_eq!(config.static_server, "http://static");
        assert_eq!(config.default_order, RankingKey::Base(BaseKey::ViewedDate));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShelfConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.default_order, ShelfConfig::default().default_order);
    }
}
