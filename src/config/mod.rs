//! Configuration module for vermap
//!
//! Settings are read from `config.toml` in the user's config directory
//! (`~/.config/vermap/config.toml` on Linux) and can be overridden with
//! `VERMAP_*` environment variables, then by command-line flags.

use crate::search::MatchPolicy;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default tracing filter when neither config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct VermapConfig {
    /// Catalog document used when `--catalog` is not given
    pub catalog_path: Option<PathBuf>,

    /// How queries match package names
    pub match_policy: MatchPolicy,

    /// Tracing filter directive (e.g. `info`, `vermap=debug`)
    pub log_level: String,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for VermapConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            match_policy: MatchPolicy::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            quiet: false,
        }
    }
}

impl VermapConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("vermap").join("config.toml"))
    }

    /// Directory for log files
    ///
    /// Falls back to the system temp directory when no data directory exists.
    #[must_use]
    pub fn log_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("vermap")
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields defaults; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, layered with `VERMAP_*` variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or a
    /// value has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("VERMAP"))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Catalog to open: the command-line path wins over the configured one
    #[must_use]
    pub fn resolve_catalog(&self, cli_path: Option<PathBuf>) -> Option<PathBuf> {
        cli_path.or_else(|| self.catalog_path.clone())
    }

    /// Match policy to use: the command-line choice wins over the configured one
    #[must_use]
    pub fn resolve_policy(&self, cli_policy: Option<MatchPolicy>) -> MatchPolicy {
        cli_policy.unwrap_or(self.match_policy)
    }
}
