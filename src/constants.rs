//! Application-wide constants
//!
//! File locations, stylesheet fragments and user-facing messages live here
//! so the store, the CLI and the GUI agree on them.

/// Vault layout relative to the vault's configuration directory
pub mod vault {
    /// Default name of the per-vault configuration directory
    pub const DEFAULT_CONFIG_DIR: &str = ".obsidian";

    /// Default plugin id used to locate the bundled stylesheet
    pub const DEFAULT_PLUGIN_ID: &str = "calloutX";

    /// Folder holding user stylesheet snippets
    pub const SNIPPETS_DIR: &str = "snippets";

    /// Folder holding installed plugins
    pub const PLUGINS_DIR: &str = "plugins";

    /// File name shared by the persisted snippet and the bundled default
    pub const STYLESHEET_FILENAME: &str = "custom-callouts.css";
}

/// Stylesheet fragments written by the serializer
pub mod stylesheet {
    /// Rule appended once after all callout blocks
    pub const TRAILING_RULE: &str = ".callout.is-collapsible .callout-title { cursor: pointer; }";

    /// Property carrying the decimal color triple
    pub const COLOR_PROPERTY: &str = "--callout-color";

    /// Property carrying the icon identifier
    pub const ICON_PROPERTY: &str = "--callout-icon";
}

/// Defaults for newly created callouts
pub mod callout {
    /// Color preselected in the add dialog
    pub const DEFAULT_HEX_COLOR: &str = "#34AB34";

    /// Icon catalogue linked from the editor
    pub const ICON_CATALOGUE_URL: &str = "https://lucide.dev/";
}

/// One-line notices shown to the user
pub mod notice {
    pub const UNSUPPORTED: &str = "CalloutX only works with a vault on the local filesystem";
    pub const NOT_FOUND_IMPORTING: &str =
        "custom-callouts.css not found in the snippets folder, importing it...";
    pub const IMPORTED: &str = "custom-callouts.css imported successfully to snippets folder";
    pub const SAVED: &str = "Custom callouts saved successfully";
    pub const SAVE_FAILED: &str = "Error saving custom callouts";
    pub const READ_FAILED: &str = "Error reading custom-callouts.css";
    pub const TEMPLATE_COPIED: &str = "Template copied to clipboard.";
}

/// Tool configuration file
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "calloutx";

    /// Config file name
    pub const FILENAME: &str = "config.json";
}
