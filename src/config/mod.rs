// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[source]` - Base URL the gallery assets are served from
//! - `[contact]` - Email/phone shown on the library screen
//! - `[[galleries]]` - Ordered gallery table (key, title, count, prefix)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `FOLIO_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "FolioLens";
const CONFIG_DIR_ENV: &str = "FOLIO_LENS_CONFIG_DIR";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Where the gallery assets live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// HTTP prefix the extension-less base paths are resolved against.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Contact details surfaced on the library screen. Buttons are hidden when
/// the corresponding field is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Subject line prefilled into the mail client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Phone number in display form; copied verbatim to the clipboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One gallery entry of the `[[galleries]]` table. Items are generated as
/// `"<prefix>/<n>"` for `n = 1..=count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    pub key: String,
    pub title: String,
    pub count: u32,
    pub prefix: String,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    /// Ordered gallery table. Empty means "use the built-in catalog".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub galleries: Vec<GalleryConfig>,
}

impl Config {
    /// The gallery table to build the catalog from: the configured one, or
    /// the built-in defaults when the file defines none.
    pub fn gallery_table(&self) -> Vec<GalleryConfig> {
        if self.galleries.is_empty() {
            default_galleries()
        } else {
            self.galleries.clone()
        }
    }

    /// The effective asset base URL, with the trailing slash stripped.
    pub fn base_url(&self) -> String {
        let url = self
            .source
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url.trim_end_matches('/').to_string()
    }
}

/// Resolves the config file path. `cli_dir` comes from `--config-dir` and
/// takes precedence over the environment variable.
pub fn config_path(cli_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = cli_dir {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load(cli_dir: Option<&Path>) -> Config {
    if let Some(path) = config_path(cli_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return config,
                Err(err) => {
                    log::warn!("failed to load {}: {}", path.display(), err);
                }
            }
        }
    }
    Config::default()
}

pub fn save(config: &Config, cli_dir: Option<&Path>) -> Result<()> {
    if let Some(path) = config_path(cli_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("invalid config at {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
