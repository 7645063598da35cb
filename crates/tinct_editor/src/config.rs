//! Tinct editor configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tinct_theme::storage::validate_key;
use tinct_theme::{Selection, ShadowKey, StoreOptions, DEFAULT_STORAGE_KEY};

/// Config file name looked up in a directory
pub const CONFIG_FILE: &str = "tinct.toml";

/// Top-level editor configuration (tinct.toml)
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the store snapshot is persisted
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Persisted entry name
    #[serde(default = "default_storage_key")]
    pub key: String,
    /// Storage directory; in-memory storage when absent
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
            dir: None,
        }
    }
}

/// Starting selection, also restored by reset
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SelectionConfig {
    #[serde(default = "default_shadow")]
    pub shadow: ShadowKey,
}

fn default_shadow() -> ShadowKey {
    ShadowKey::Md
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            shadow: default_shadow(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl EditorConfig {
    /// Load configuration from a directory (looks for tinct.toml)
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = Self::resolve(path);

        if !config_path.exists() {
            anyhow::bail!("No {} found in {}.", CONFIG_FILE, path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Like [`EditorConfig::load_from_dir`], but a missing file yields defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if Self::resolve(path).exists() {
            Self::load_from_dir(path)
        } else {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid editor configuration")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Options for opening the token store
    pub fn store_options(&self) -> Result<StoreOptions> {
        validate_key(&self.storage.key)
            .with_context(|| format!("Invalid [storage] key in {}", CONFIG_FILE))?;
        Ok(StoreOptions {
            storage_key: self.storage.key.clone(),
            default_selection: Selection::with_shadow(self.selection.shadow),
        })
    }

    fn resolve(path: &Path) -> PathBuf {
        if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        }
    }
}
