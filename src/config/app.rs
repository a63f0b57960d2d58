//! Settings for the calloutx tool itself
//!
//! Stored as JSON under the platform config directory. Vault contents are
//! never kept here; this only remembers where the vault is and how it is laid
//! out.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::vault::{DEFAULT_CONFIG_DIR, DEFAULT_PLUGIN_ID};
use crate::vault::VaultLayout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Vault opened last; `None` until the user picks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault: Option<PathBuf>,
    /// Name of the vault's configuration directory
    #[serde(default = "default_config_dir")]
    pub config_dir: String,
    /// Plugin folder holding the bundled default stylesheet
    #[serde(default = "default_plugin_id")]
    pub plugin_id: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_config_dir() -> String {
    DEFAULT_CONFIG_DIR.to_string()
}

fn default_plugin_id() -> String {
    DEFAULT_PLUGIN_ID.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_width() -> f32 {
    640.0
}

fn default_window_height() -> f32 {
    720.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vault: None,
            config_dir: default_config_dir(),
            plugin_id: default_plugin_id(),
            log_level: default_log_level(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppConfig {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load from the default location, writing defaults there on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "config file not found, creating default config");
            let config = AppConfig::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: AppConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        info!(path = %path.display(), vault = ?config.vault, "loaded config");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;
        fs::write(path, json).with_context(|| format!("Failed to write config to {:?}", path))?;

        info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Layout for the configured vault, if one is set
    pub fn vault_layout(&self) -> Option<VaultLayout> {
        self.vault
            .as_ref()
            .map(|root| VaultLayout::new(root, &self.config_dir, &self.plugin_id))
    }
}
