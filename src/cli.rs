//! Command-line interface

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::callout::template::callout_template;
use crate::callout::{CalloutRecord, Rgb};
use crate::config::AppConfig;
use crate::constants::callout::DEFAULT_HEX_COLOR;
use crate::host::{ConsoleNotifier, local_file_access};
use crate::store::{CalloutStore, LoadStatus};
use crate::vault::VaultLayout;

#[derive(Debug, Parser)]
#[command(name = "calloutx", version, about = "Manage custom callout styles for a notes vault")]
pub struct Cli {
    /// Vault root directory (overrides the saved config)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Name of the vault's configuration directory
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Plugin folder holding the bundled default stylesheet
    #[arg(long, global = true)]
    pub plugin_id: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Open the settings window (default)
    Gui,
    /// List callouts, optionally filtered by name or icon
    List {
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Add a callout
    Add {
        name: String,
        /// Accent color as #RRGGBB
        #[arg(long, default_value = DEFAULT_HEX_COLOR)]
        color: String,
        /// Lucide icon name
        #[arg(long)]
        icon: String,
    },
    /// Edit the first callout called NAME
    Edit {
        name: String,
        #[arg(long)]
        rename: Option<String>,
        /// Accent color as #RRGGBB
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Delete every callout called NAME
    Delete { name: String },
    /// Print a ready-to-paste callout
    Template { name: String },
    /// Print the generated icon color rules
    IconStyles,
    /// Print the snippet and bundled default locations
    Path,
}

impl Cli {
    /// Fold command-line overrides into the loaded config
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(vault) = &self.vault {
            config.vault = Some(vault.clone());
        }
        if let Some(config_dir) = &self.config_dir {
            config.config_dir = config_dir.clone();
        }
        if let Some(plugin_id) = &self.plugin_id {
            config.plugin_id = plugin_id.clone();
        }
    }
}

/// Store for `layout`, with persistence only if the vault is a local directory
pub fn open_store(layout: VaultLayout) -> CalloutStore {
    let files = local_file_access(layout.root());
    CalloutStore::new(layout, files, Box::new(ConsoleNotifier))
}

/// Run a non-GUI command against the configured vault
pub fn run(command: Command, config: &AppConfig) -> Result<()> {
    let layout = config
        .vault_layout()
        .context("No vault configured; pass --vault <dir> or open one from the settings window")?;

    if let Command::Path = command {
        println!("snippet: {}", layout.snippet_path().display());
        println!("bundled default: {}", layout.bundled_default_path().display());
        return Ok(());
    }

    let mut store = open_store(layout);
    let status = store.load();
    info!(?status, "store ready");

    match command {
        // Dispatched before a store is opened
        Command::Gui | Command::Path => {}
        Command::List { search } => {
            let term = search.unwrap_or_default();
            for record in store.search(&term) {
                println!("{:<20} {}  {}", record.name, record.color.to_hex(), record.icon);
            }
        }
        Command::Add { name, color, icon } => {
            require_persistence(status)?;
            let color = parse_hex(&color)?;
            store
                .add(CalloutRecord::new(name, color, icon))
                .context("Failed to save new callout")?;
        }
        Command::Edit {
            name,
            rename,
            color,
            icon,
        } => {
            require_persistence(status)?;
            let index = store
                .position(&name)
                .with_context(|| format!("No callout named '{name}'"))?;

            let mut record = store.records()[index].clone();
            if let Some(rename) = rename {
                record.name = rename;
            }
            if let Some(color) = color {
                record.color = parse_hex(&color)?;
            }
            if let Some(icon) = icon {
                record.icon = icon;
            }
            store.update(index, record).context("Failed to save edited callout")?;
        }
        Command::Delete { name } => {
            require_persistence(status)?;
            let removed = store.remove(&name).context("Failed to save after delete")?;
            if removed == 0 {
                bail!("No callout named '{name}'");
            }
        }
        Command::Template { name } => {
            if store.position(&name).is_none() {
                bail!("No callout named '{name}'");
            }
            println!("{}", callout_template(&name));
        }
        Command::IconStyles => {
            print!("{}", store.cache().stylesheet());
        }
    }

    Ok(())
}

fn parse_hex(input: &str) -> Result<Rgb> {
    Rgb::from_hex(input).with_context(|| format!("Invalid --color '{input}'"))
}

fn require_persistence(status: LoadStatus) -> Result<()> {
    if status == LoadStatus::Unsupported {
        bail!("Vault is not a local directory; changes cannot be saved");
    }
    Ok(())
}
