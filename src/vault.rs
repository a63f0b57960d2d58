//! Locations inside a vault

use std::path::{Path, PathBuf};

use crate::constants::vault::{PLUGINS_DIR, SNIPPETS_DIR, STYLESHEET_FILENAME};

/// Resolves the snippet and bundled-default paths for one vault
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultLayout {
    root: PathBuf,
    config_dir: String,
    plugin_id: String,
}

impl VaultLayout {
    pub fn new(root: impl Into<PathBuf>, config_dir: impl Into<String>, plugin_id: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            config_dir: config_dir.into(),
            plugin_id: plugin_id.into(),
        }
    }

    /// Layout with the stock `.obsidian` config dir and `calloutX` plugin id
    #[cfg(test)]
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        use crate::constants::vault::{DEFAULT_CONFIG_DIR, DEFAULT_PLUGIN_ID};
        Self::new(root, DEFAULT_CONFIG_DIR, DEFAULT_PLUGIN_ID)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<configDir>`
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(&self.config_dir)
    }

    /// `<configDir>/snippets`
    pub fn snippets_dir(&self) -> PathBuf {
        self.config_dir().join(SNIPPETS_DIR)
    }

    /// `<configDir>/snippets/custom-callouts.css`, where records are persisted
    pub fn snippet_path(&self) -> PathBuf {
        self.snippets_dir().join(STYLESHEET_FILENAME)
    }

    /// `<configDir>/plugins/<plugin-id>/custom-callouts.css`, copied on first use
    pub fn bundled_default_path(&self) -> PathBuf {
        self.config_dir()
            .join(PLUGINS_DIR)
            .join(&self.plugin_id)
            .join(STYLESHEET_FILENAME)
    }
}
