//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};
use crate::definitions::Definitions;
use crate::editor::RefreshPolicy;
use crate::engine::ConvertOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Definition file (defaults to `Templates/Template.toml` next to the executable)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<PathBuf>,
}

/// Conversion behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConversionConfig {
    /// When edits trigger a new conversion
    #[serde(default)]
    pub refresh_policy: RefreshPolicy,
    /// Log modifiers whose placeholder could not be resolved
    #[serde(default)]
    pub report_unresolved: bool,
}

impl ConversionConfig {
    /// Converter options derived from this configuration.
    #[must_use]
    pub const fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            report_unresolved: self.report_unresolved,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/TemplateBuilder/config.toml`
/// - macOS: `~/Library/Application Support/TemplateBuilder/config.toml`
/// - Windows: `%APPDATA%\TemplateBuilder\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Conversion settings
    #[serde(default)]
    pub conversion: ConversionConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// `TEMPLATE_BUILDER_CONFIG_DIR` takes precedence when set.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `definitions` path, if set, is not empty
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.paths.definitions {
            if path.as_os_str().is_empty() {
                anyhow::bail!("paths.definitions must not be empty");
            }
        }
        Ok(())
    }

    /// Resolves the definition file to load.
    ///
    /// An explicit path wins over the configured one, which wins over the
    /// default location next to the executable.
    #[must_use]
    pub fn definitions_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.paths.definitions.clone())
            .unwrap_or_else(Definitions::default_path)
    }
}
