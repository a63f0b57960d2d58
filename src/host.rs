//! Capabilities the store borrows from its host
//!
//! The store never touches `std::fs` or the terminal directly. It is handed a
//! [`FileAccess`] (or `None` when the vault is not on a local filesystem) and
//! a [`Notifier`] for one-line user messages.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::mpsc::Sender;

use tracing::{info, warn};

/// Whole-file operations on the vault
pub trait FileAccess {
    fn read(&self, path: &Path) -> io::Result<String>;
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;
    fn ensure_dir(&self, path: &Path) -> io::Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileAccess`] backed by the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileAccess;

impl FileAccess for LocalFileAccess {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::copy(from, to).map(|_| ())
    }

    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// File access for a vault rooted at `vault_root`, if it is a local directory
pub fn local_file_access(vault_root: &Path) -> Option<Box<dyn FileAccess>> {
    if vault_root.is_dir() {
        Some(Box::new(LocalFileAccess))
    } else {
        warn!(vault = %vault_root.display(), "vault root is not a local directory, persistence disabled");
        None
    }
}

/// Sink for transient one-line messages
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Prints notices on stdout (CLI)
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

/// Forwards notices to the GUI thread, which drains them once per frame
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<String>,
}

impl ChannelNotifier {
    pub fn new(tx: Sender<String>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, message: &str) {
        if self.tx.send(message.to_string()).is_err() {
            // Receiver gone means the window is closing; keep the notice in the log
            info!(notice = %message, "notice dropped, GUI receiver closed");
        }
    }
}
