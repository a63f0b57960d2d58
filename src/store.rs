//! Authoritative callout list and its persistence
//!
//! [`CalloutStore`] owns the records for one vault. Frontends hold the store
//! and go through [`add`](CalloutStore::add), [`update`](CalloutStore::update)
//! and [`remove`](CalloutStore::remove); each rewrites the whole snippet file
//! and rebuilds the presentation cache.
//!
//! Failures never escape as panics or hard errors to the host: they are
//! logged, turned into a notice where the user should know, and returned as
//! [`StoreError`] for callers that care.

use std::cell::Cell;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::callout::stylesheet::{parse, serialize};
use crate::callout::{self, CalloutRecord};
use crate::constants::notice;
use crate::host::{FileAccess, Notifier};
use crate::presentation::PresentationCache;
use crate::vault::VaultLayout;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file access is not available for this vault")]
    Unsupported,

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to import {from:?} into {to:?}: {source}")]
    Import {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no callout at position {0}")]
    NoSuchIndex(usize),

    #[error("callout at position {0} changed since it was opened for editing")]
    Changed(usize),
}

/// How [`CalloutStore::load`] obtained its list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Parsed from the existing snippet file
    Loaded,
    /// Snippet was missing; the bundled default was copied in and parsed
    ImportedDefault,
    /// Snippet was missing and nothing could be imported
    Empty,
    /// Snippet exists but could not be read
    ReadFailed,
    /// No file access in this environment; persistence is off for the session
    Unsupported,
}

/// Result of [`CalloutStore::import_default`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported,
    /// Snippet already exists, nothing copied
    AlreadyPresent,
    /// No bundled default ships with the plugin
    NothingToImport,
}

pub struct CalloutStore {
    layout: VaultLayout,
    files: Option<Box<dyn FileAccess>>,
    notifier: Box<dyn Notifier>,
    records: Vec<CalloutRecord>,
    cache: PresentationCache,
    unsupported_notified: Cell<bool>,
}

impl CalloutStore {
    /// `files` is `None` when the host cannot offer filesystem access
    pub fn new(
        layout: VaultLayout,
        files: Option<Box<dyn FileAccess>>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            layout,
            files,
            notifier,
            records: Vec::new(),
            cache: PresentationCache::new(),
            unsupported_notified: Cell::new(false),
        }
    }

    pub fn records(&self) -> &[CalloutRecord] {
        &self.records
    }

    pub fn cache(&self) -> &PresentationCache {
        &self.cache
    }

    pub fn layout(&self) -> &VaultLayout {
        &self.layout
    }

    pub fn is_persistent(&self) -> bool {
        self.files.is_some()
    }

    /// Position of the first record called `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    pub fn search(&self, term: &str) -> Vec<&CalloutRecord> {
        callout::search(&self.records, term)
    }

    /// Replace the in-memory list with the persisted one, importing the
    /// bundled default on first use
    pub fn load(&mut self) -> LoadStatus {
        let status = self.read_records();
        self.cache.refresh(&self.records);
        info!(?status, records = self.records.len(), "loaded callouts");
        status
    }

    fn read_records(&mut self) -> LoadStatus {
        if self.files.is_none() {
            self.notify_unsupported();
            self.records.clear();
            return LoadStatus::Unsupported;
        }

        let path = self.layout.snippet_path();
        match self.read_snippet(&path) {
            Ok(text) => {
                self.records = parse(&text);
                LoadStatus::Loaded
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "snippet not found, importing bundled default");
                self.notifier.notify(notice::NOT_FOUND_IMPORTING);

                let imported = matches!(self.import_default(), Ok(ImportOutcome::Imported));
                match self.read_snippet(&path) {
                    Ok(text) => {
                        self.records = parse(&text);
                        if imported {
                            LoadStatus::ImportedDefault
                        } else {
                            LoadStatus::Loaded
                        }
                    }
                    Err(err) => {
                        debug!(path = %path.display(), error = %err, "snippet still unavailable after import");
                        self.records.clear();
                        LoadStatus::Empty
                    }
                }
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to read snippet");
                self.notifier.notify(notice::READ_FAILED);
                self.records.clear();
                LoadStatus::ReadFailed
            }
        }
    }

    fn read_snippet(&self, path: &Path) -> io::Result<String> {
        match self.files.as_deref() {
            Some(files) => files.read(path),
            None => Err(io::Error::new(io::ErrorKind::Unsupported, "file access unavailable")),
        }
    }

    /// Copy the bundled default stylesheet into the snippets folder if no
    /// snippet exists yet
    pub fn import_default(&self) -> Result<ImportOutcome, StoreError> {
        let files = match self.files() {
            Ok(files) => files,
            Err(err) => {
                self.notify_unsupported();
                return Err(err);
            }
        };

        let to = self.layout.snippet_path();
        if files.exists(&to) {
            debug!(path = %to.display(), "snippet already present, skipping import");
            return Ok(ImportOutcome::AlreadyPresent);
        }

        let from = self.layout.bundled_default_path();
        if !files.exists(&from) {
            info!(path = %from.display(), "custom-callouts.css not found in plugin folder");
            return Ok(ImportOutcome::NothingToImport);
        }

        let copied = files
            .ensure_dir(&self.layout.snippets_dir())
            .and_then(|_| files.copy(&from, &to));

        match copied {
            Ok(()) => {
                info!(from = %from.display(), to = %to.display(), "imported bundled callouts");
                self.notifier.notify(notice::IMPORTED);
                Ok(ImportOutcome::Imported)
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                info!(path = %from.display(), "custom-callouts.css not found in plugin folder");
                Ok(ImportOutcome::NothingToImport)
            }
            Err(source) => {
                error!(from = %from.display(), to = %to.display(), error = %source, "failed to import bundled callouts");
                Err(StoreError::Import { from, to, source })
            }
        }
    }

    /// Rewrite the snippet file from the current list
    pub fn save(&self) -> Result<(), StoreError> {
        let files = match self.files() {
            Ok(files) => files,
            Err(err) => {
                self.notify_unsupported();
                return Err(err);
            }
        };

        let path = self.layout.snippet_path();
        let contents = serialize(&self.records);
        let written = files
            .ensure_dir(&self.layout.snippets_dir())
            .and_then(|_| files.write(&path, &contents));

        match written {
            Ok(()) => {
                info!(path = %path.display(), records = self.records.len(), "saved callouts");
                self.notifier.notify(notice::SAVED);
                Ok(())
            }
            Err(source) => {
                error!(path = %path.display(), error = %source, "error saving custom callouts");
                self.notifier.notify(notice::SAVE_FAILED);
                Err(StoreError::Write { path, source })
            }
        }
    }

    /// Append a record. Names are not checked for uniqueness.
    pub fn add(&mut self, record: CalloutRecord) -> Result<(), StoreError> {
        info!(callout = %record.name, icon = %record.icon, color = %record.color, "adding callout");
        self.records.push(record);
        self.commit()
    }

    /// Replace the record at `index`
    pub fn update(&mut self, index: usize, record: CalloutRecord) -> Result<(), StoreError> {
        let Some(slot) = self.records.get_mut(index) else {
            warn!(index, "update requested for missing callout");
            return Err(StoreError::NoSuchIndex(index));
        };
        info!(index, from = %slot.name, to = %record.name, "updating callout");
        *slot = record;
        self.commit()
    }

    /// Replace the record at `index` only if it still equals `expected`.
    /// Guards edits opened before the list shifted under them.
    pub fn replace(
        &mut self,
        index: usize,
        expected: &CalloutRecord,
        record: CalloutRecord,
    ) -> Result<(), StoreError> {
        match self.records.get(index) {
            None => {
                warn!(index, "replace requested for missing callout");
                Err(StoreError::NoSuchIndex(index))
            }
            Some(current) if current != expected => {
                warn!(index, expected = %expected.name, found = %current.name, "callout moved, edit dropped");
                Err(StoreError::Changed(index))
            }
            Some(_) => self.update(index, record),
        }
    }

    /// Remove every record called `name`; returns how many were removed
    pub fn remove(&mut self, name: &str) -> Result<usize, StoreError> {
        let before = self.records.len();
        self.records.retain(|r| r.name != name);
        let removed = before - self.records.len();
        if removed == 0 {
            debug!(callout = %name, "nothing to remove");
            return Ok(0);
        }
        info!(callout = %name, removed, "removing callout");
        self.commit()?;
        Ok(removed)
    }

    /// Persist and refresh the cache; the in-memory list stays as is if the write fails
    fn commit(&mut self) -> Result<(), StoreError> {
        let saved = self.save();
        self.cache.refresh(&self.records);
        saved
    }

    fn files(&self) -> Result<&dyn FileAccess, StoreError> {
        self.files.as_deref().ok_or(StoreError::Unsupported)
    }

    fn notify_unsupported(&self) {
        if !self.unsupported_notified.replace(true) {
            warn!("file access unavailable, callouts will not be persisted this session");
            self.notifier.notify(notice::UNSUPPORTED);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callout::Rgb;
    use crate::host::LocalFileAccess;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    const TWO_BLOCKS: &str = ".callout[data-callout=\"recipe\"] {\n  --callout-color: 200, 100, 0;\n  --callout-icon: chef-hat;\n}\n\n\
        .callout[data-callout=\"idea\"] {\n  --callout-color: 255, 200, 0;\n  --callout-icon: lightbulb;\n}\n\n\
        .callout.is-collapsible .callout-title { cursor: pointer; }";

    #[derive(Clone, Default)]
    struct RecordingNotifier(Rc<RefCell<Vec<String>>>);

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    /// Local files, but every write is refused
    struct ReadOnlyFiles;

    impl FileAccess for ReadOnlyFiles {
        fn read(&self, path: &Path) -> io::Result<String> {
            LocalFileAccess.read(path)
        }
        fn write(&self, _path: &Path, _contents: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
        fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
            LocalFileAccess.copy(from, to)
        }
        fn ensure_dir(&self, path: &Path) -> io::Result<()> {
            LocalFileAccess.ensure_dir(path)
        }
        fn exists(&self, path: &Path) -> bool {
            LocalFileAccess.exists(path)
        }
    }

    /// Local files with one operation forced to fail
    struct FailingFiles {
        read: Option<io::ErrorKind>,
        copy: Option<io::ErrorKind>,
    }

    impl FileAccess for FailingFiles {
        fn read(&self, path: &Path) -> io::Result<String> {
            match self.read {
                Some(kind) => Err(io::Error::new(kind, "read refused")),
                None => LocalFileAccess.read(path),
            }
        }
        fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
            LocalFileAccess.write(path, contents)
        }
        fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
            match self.copy {
                Some(kind) => Err(io::Error::new(kind, "copy refused")),
                None => LocalFileAccess.copy(from, to),
            }
        }
        fn ensure_dir(&self, path: &Path) -> io::Result<()> {
            LocalFileAccess.ensure_dir(path)
        }
        fn exists(&self, path: &Path) -> bool {
            LocalFileAccess.exists(path)
        }
    }

    fn record(name: &str, rgb: (u8, u8, u8), icon: &str) -> CalloutRecord {
        CalloutRecord::new(name, Rgb::new(rgb.0, rgb.1, rgb.2), icon)
    }

    fn store_in(dir: &TempDir) -> (CalloutStore, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let store = CalloutStore::new(
            VaultLayout::with_defaults(dir.path()),
            Some(Box::new(LocalFileAccess)),
            Box::new(notifier.clone()),
        );
        (store, notifier)
    }

    fn write_file(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_load_existing_snippet() {
        let dir = TempDir::new().unwrap();
        let (mut store, notifier) = store_in(&dir);
        write_file(&store.layout().snippet_path(), TWO_BLOCKS);

        assert_eq!(store.load(), LoadStatus::Loaded);
        assert_eq!(
            store.records(),
            &[record("recipe", (200, 100, 0), "chef-hat"), record("idea", (255, 200, 0), "lightbulb")]
        );
        assert_eq!(store.cache().len(), 2);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn test_first_run_imports_bundled_default() {
        let dir = TempDir::new().unwrap();
        let (mut store, notifier) = store_in(&dir);
        write_file(&store.layout().bundled_default_path(), TWO_BLOCKS);

        assert_eq!(store.load(), LoadStatus::ImportedDefault);
        assert_eq!(store.records().len(), 2);
        assert_eq!(store.records()[0].name, "recipe");
        assert_eq!(store.records()[1].name, "idea");

        let persisted = fs::read_to_string(store.layout().snippet_path()).unwrap();
        assert_eq!(parse(&persisted), store.records());
        assert_eq!(
            notifier.messages(),
            vec![notice::NOT_FOUND_IMPORTING.to_string(), notice::IMPORTED.to_string()]
        );
    }

    #[test]
    fn test_first_run_without_bundled_default_is_empty() {
        let dir = TempDir::new().unwrap();
        let (mut store, notifier) = store_in(&dir);

        assert_eq!(store.load(), LoadStatus::Empty);
        assert!(store.records().is_empty());
        assert!(store.cache().is_empty());
        assert_eq!(notifier.messages(), vec![notice::NOT_FOUND_IMPORTING.to_string()]);
    }

    #[test]
    fn test_unreadable_snippet_reports_read_failure_without_import() {
        let dir = TempDir::new().unwrap();
        let notifier = RecordingNotifier::default();
        let layout = VaultLayout::with_defaults(dir.path());
        write_file(&layout.snippet_path(), TWO_BLOCKS);
        write_file(&layout.bundled_default_path(), TWO_BLOCKS);
        let files = FailingFiles {
            read: Some(io::ErrorKind::PermissionDenied),
            copy: None,
        };

        let mut store = CalloutStore::new(layout, Some(Box::new(files)), Box::new(notifier.clone()));

        assert_eq!(store.load(), LoadStatus::ReadFailed);
        assert!(store.records().is_empty());
        assert!(store.cache().is_empty());
        assert_eq!(notifier.messages(), vec![notice::READ_FAILED.to_string()]);
        // Existing snippet left alone, nothing imported over it
        let persisted = fs::read_to_string(store.layout().snippet_path()).unwrap();
        assert_eq!(persisted, TWO_BLOCKS);
    }

    #[test]
    fn test_non_utf8_snippet_reports_read_failure() {
        let dir = TempDir::new().unwrap();
        let (mut store, notifier) = store_in(&dir);
        let path = store.layout().snippet_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        assert_eq!(store.load(), LoadStatus::ReadFailed);
        assert_eq!(notifier.messages(), vec![notice::READ_FAILED.to_string()]);
    }

    #[test]
    fn test_failed_import_copy_is_logged_only() {
        let dir = TempDir::new().unwrap();
        let notifier = RecordingNotifier::default();
        let layout = VaultLayout::with_defaults(dir.path());
        write_file(&layout.bundled_default_path(), TWO_BLOCKS);
        let files = FailingFiles {
            read: None,
            copy: Some(io::ErrorKind::PermissionDenied),
        };

        let mut store = CalloutStore::new(layout, Some(Box::new(files)), Box::new(notifier.clone()));

        assert!(matches!(store.import_default(), Err(StoreError::Import { .. })));
        assert_eq!(store.load(), LoadStatus::Empty);
        assert!(store.records().is_empty());
        assert_eq!(notifier.messages(), vec![notice::NOT_FOUND_IMPORTING.to_string()]);
        assert!(!store.layout().snippet_path().exists());
    }

    #[test]
    fn test_import_default_does_not_overwrite_existing_snippet() {
        let dir = TempDir::new().unwrap();
        let (store, _notifier) = store_in(&dir);
        write_file(&store.layout().snippet_path(), "mine");
        write_file(&store.layout().bundled_default_path(), TWO_BLOCKS);

        assert_eq!(store.import_default().unwrap(), ImportOutcome::AlreadyPresent);
        assert_eq!(fs::read_to_string(store.layout().snippet_path()).unwrap(), "mine");
    }

    #[test]
    fn test_import_default_missing_bundle_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let (store, notifier) = store_in(&dir);
        assert_eq!(store.import_default().unwrap(), ImportOutcome::NothingToImport);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn test_shipped_default_stylesheet_parses() {
        let records = parse(include_str!("../assets/custom-callouts.css"));
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| !r.name.is_empty() && !r.icon.is_empty()));
    }

    #[test]
    fn test_unsupported_environment_notifies_once() {
        let dir = TempDir::new().unwrap();
        let notifier = RecordingNotifier::default();
        let mut store = CalloutStore::new(
            VaultLayout::with_defaults(dir.path()),
            None,
            Box::new(notifier.clone()),
        );

        assert!(!store.is_persistent());
        assert_eq!(store.load(), LoadStatus::Unsupported);
        assert!(store.records().is_empty());

        // Mutations still apply in memory but cannot be saved
        assert!(matches!(
            store.add(record("a", (1, 2, 3), "star")),
            Err(StoreError::Unsupported)
        ));
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.cache().len(), 1);
        assert!(matches!(store.save(), Err(StoreError::Unsupported)));

        assert_eq!(notifier.messages(), vec![notice::UNSUPPORTED.to_string()]);
    }

    #[test]
    fn test_add_saves_and_refreshes_cache() {
        let dir = TempDir::new().unwrap();
        let (mut store, notifier) = store_in(&dir);
        store.load();

        store.add(record("recipe", (52, 171, 52), "chef-hat")).unwrap();

        let persisted = fs::read_to_string(store.layout().snippet_path()).unwrap();
        assert_eq!(persisted, serialize(store.records()));
        assert_eq!(store.cache().color_for("recipe"), Some(Rgb::new(52, 171, 52)));
        assert_eq!(notifier.messages().last().unwrap(), notice::SAVED);
    }

    #[test]
    fn test_add_allows_duplicate_names() {
        let dir = TempDir::new().unwrap();
        let (mut store, _notifier) = store_in(&dir);
        store.add(record("a", (1, 1, 1), "x")).unwrap();
        store.add(record("a", (2, 2, 2), "y")).unwrap();

        assert_eq!(store.records().len(), 2);
        assert_eq!(store.cache().len(), 1);
        assert_eq!(store.cache().rule("a").unwrap().icon, "y");
    }

    #[test]
    fn test_update_replaces_record_at_index() {
        let dir = TempDir::new().unwrap();
        let (mut store, _notifier) = store_in(&dir);
        store.add(record("a", (1, 1, 1), "x")).unwrap();
        store.add(record("b", (2, 2, 2), "y")).unwrap();

        store.update(0, record("renamed", (9, 9, 9), "z")).unwrap();

        assert_eq!(store.records()[0], record("renamed", (9, 9, 9), "z"));
        assert!(store.cache().rule("a").is_none());
        assert_eq!(store.cache().color_for("renamed"), Some(Rgb::new(9, 9, 9)));

        let persisted = fs::read_to_string(store.layout().snippet_path()).unwrap();
        assert_eq!(parse(&persisted), store.records());
    }

    #[test]
    fn test_update_missing_index() {
        let dir = TempDir::new().unwrap();
        let (mut store, _notifier) = store_in(&dir);
        assert!(matches!(
            store.update(3, record("a", (1, 1, 1), "x")),
            Err(StoreError::NoSuchIndex(3))
        ));
    }

    #[test]
    fn test_replace_refuses_shifted_record() {
        let dir = TempDir::new().unwrap();
        let (mut store, _notifier) = store_in(&dir);
        store.add(record("a", (1, 1, 1), "x")).unwrap();
        store.add(record("b", (2, 2, 2), "y")).unwrap();
        store.add(record("c", (3, 3, 3), "z")).unwrap();

        let opened = store.records()[1].clone();
        store.remove("a").unwrap();

        let err = store
            .replace(1, &opened, record("b", (9, 9, 9), "y"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Changed(1)));
        assert_eq!(
            store.records(),
            &[record("b", (2, 2, 2), "y"), record("c", (3, 3, 3), "z")]
        );

        let persisted = fs::read_to_string(store.layout().snippet_path()).unwrap();
        assert_eq!(parse(&persisted), store.records());
    }

    #[test]
    fn test_replace_updates_unchanged_record() {
        let dir = TempDir::new().unwrap();
        let (mut store, _notifier) = store_in(&dir);
        store.add(record("a", (1, 1, 1), "x")).unwrap();
        store.add(record("b", (2, 2, 2), "y")).unwrap();

        let opened = store.records()[1].clone();
        store.replace(1, &opened, record("b", (9, 9, 9), "y")).unwrap();
        assert_eq!(store.records()[1], record("b", (9, 9, 9), "y"));
        assert!(matches!(
            store.replace(5, &opened, opened.clone()),
            Err(StoreError::NoSuchIndex(5))
        ));
    }

    #[test]
    fn test_remove_deletes_all_matching_names() {
        let dir = TempDir::new().unwrap();
        let (mut store, _notifier) = store_in(&dir);
        store.add(record("a", (1, 1, 1), "x")).unwrap();
        store.add(record("b", (2, 2, 2), "y")).unwrap();
        store.add(record("a", (3, 3, 3), "z")).unwrap();

        assert_eq!(store.remove("a").unwrap(), 2);
        assert_eq!(store.records(), &[record("b", (2, 2, 2), "y")]);
        assert_eq!(store.cache().len(), 1);

        let persisted = fs::read_to_string(store.layout().snippet_path()).unwrap();
        assert_eq!(parse(&persisted), vec![record("b", (2, 2, 2), "y")]);
    }

    #[test]
    fn test_remove_unknown_name_is_noop() {
        let dir = TempDir::new().unwrap();
        let (mut store, notifier) = store_in(&dir);
        assert_eq!(store.remove("ghost").unwrap(), 0);
        assert!(notifier.messages().is_empty());
        assert!(!store.layout().snippet_path().exists());
    }

    #[test]
    fn test_write_failure_keeps_memory_and_notifies() {
        let dir = TempDir::new().unwrap();
        let notifier = RecordingNotifier::default();
        let layout = VaultLayout::with_defaults(dir.path());
        write_file(&layout.snippet_path(), TWO_BLOCKS);

        let mut store = CalloutStore::new(layout, Some(Box::new(ReadOnlyFiles)), Box::new(notifier.clone()));
        store.load();

        let err = store.add(record("new", (1, 2, 3), "star")).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(store.records().len(), 3);
        assert_eq!(store.cache().len(), 3);
        assert_eq!(notifier.messages(), vec![notice::SAVE_FAILED.to_string()]);

        // File on disk is untouched
        let persisted = fs::read_to_string(store.layout().snippet_path()).unwrap();
        assert_eq!(persisted, TWO_BLOCKS);
    }

    #[test]
    fn test_reload_after_save_roundtrips() {
        let dir = TempDir::new().unwrap();
        let (mut store, _notifier) = store_in(&dir);
        store.add(record("a", (1, 2, 3), "x")).unwrap();
        store.add(record("b", (4, 5, 6), "y")).unwrap();
        let saved = store.records().to_vec();

        let (mut reopened, _notifier) = store_in(&dir);
        assert_eq!(reopened.load(), LoadStatus::Loaded);
        assert_eq!(reopened.records(), saved.as_slice());
    }

    #[test]
    fn test_search_and_position() {
        let dir = TempDir::new().unwrap();
        let (mut store, _notifier) = store_in(&dir);
        store.add(record("recipe", (1, 1, 1), "chef-hat")).unwrap();
        store.add(record("idea", (2, 2, 2), "lightbulb")).unwrap();

        assert_eq!(store.position("idea"), Some(1));
        assert_eq!(store.position("nope"), None);
        assert_eq!(store.search("BULB").len(), 1);
    }
}
