//! Settings window implemented with egui/eframe

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::{error, info, warn};

use super::components::{CalloutBrowser, CalloutEditor, CalloutList, EditorAction, ListAction};
use super::constants::*;
use crate::config::AppConfig;
use crate::constants::notice;
use crate::host::{ChannelNotifier, local_file_access};
use crate::store::{CalloutStore, LoadStatus, StoreError};

struct StatusMessage {
    text: String,
    color: egui::Color32,
    shown_at: Instant,
}

impl StatusMessage {
    fn new(text: impl Into<String>, color: egui::Color32) -> Self {
        Self {
            text: text.into(),
            color,
            shown_at: Instant::now(),
        }
    }

    fn from_notice(text: String) -> Self {
        let color = if is_failure_notice(&text) {
            STATUS_ERROR
        } else {
            STATUS_OK
        };
        Self::new(text, color)
    }

    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= Duration::from_millis(NOTICE_DURATION_MS)
    }
}

fn is_failure_notice(text: &str) -> bool {
    [notice::SAVE_FAILED, notice::READ_FAILED, notice::UNSUPPORTED].contains(&text)
}

struct CalloutManagerApp {
    config: AppConfig,
    vault_input: String,
    store: Option<CalloutStore>,
    notice_tx: Sender<String>,
    notice_rx: Receiver<String>,
    status_message: Option<StatusMessage>,
    list: CalloutList,
    editor: CalloutEditor,
    browser: CalloutBrowser,
    show_icon_styles: bool,
}

impl CalloutManagerApp {
    fn new(_cc: &CreationContext<'_>, config: AppConfig) -> Self {
        info!("Initializing callout manager");

        let (notice_tx, notice_rx) = mpsc::channel();
        let vault_input = config
            .vault
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();

        let mut app = Self {
            config,
            vault_input,
            store: None,
            notice_tx,
            notice_rx,
            status_message: None,
            list: CalloutList::new(),
            editor: CalloutEditor::new(),
            browser: CalloutBrowser::new(),
            show_icon_styles: false,
        };

        if app.config.vault.is_some() {
            app.open_vault();
        }

        app
    }

    /// (Re)build the store for the configured vault and load it
    fn open_vault(&mut self) {
        let Some(layout) = self.config.vault_layout() else {
            return;
        };

        let files = local_file_access(layout.root());
        let notifier = Box::new(ChannelNotifier::new(self.notice_tx.clone()));
        let mut store = CalloutStore::new(layout, files, notifier);

        let status = store.load();
        info!(?status, count = store.records().len(), "vault opened");

        if status == LoadStatus::Loaded {
            self.status_message = Some(StatusMessage::new(
                format!("Loaded {} callouts", store.records().len()),
                STATUS_OK,
            ));
        }

        // A pending edit points into the previous vault's list
        if self.editor.is_open() {
            self.editor.close();
        }
        self.store = Some(store);
    }

    fn apply_vault_input(&mut self) {
        let path = self.vault_input.trim();
        if path.is_empty() {
            return;
        }

        self.config.vault = Some(PathBuf::from(path));
        if let Err(err) = self.config.save() {
            error!(error = ?err, "Failed to save config");
            self.status_message = Some(StatusMessage::new(
                format!("Failed to save config: {err}"),
                STATUS_ERROR,
            ));
        }
        self.open_vault();
    }

    fn drain_notices(&mut self) {
        while let Ok(text) = self.notice_rx.try_recv() {
            self.status_message = Some(StatusMessage::from_notice(text));
        }

        if self.status_message.as_ref().is_some_and(StatusMessage::expired) {
            self.status_message = None;
        }
    }

    fn handle_list_action(&mut self, action: ListAction) {
        let Some(store) = self.store.as_mut() else {
            return;
        };

        match action {
            ListAction::None => {}
            ListAction::Add => self.editor.open_add(),
            ListAction::Edit(index) => {
                if let Some(record) = store.records().get(index) {
                    self.editor.open_edit(index, record);
                }
            }
            ListAction::Delete(name) => {
                // Positions shift after a delete, drop any edit in flight
                if self.editor.is_open() {
                    info!(name = %name, "closing editor after delete");
                    self.editor.close();
                }
                match store.remove(&name) {
                    Ok(removed) => info!(name = %name, removed, "callout deleted"),
                    Err(err) => warn!(name = %name, error = %err, "delete not persisted"),
                }
            }
        }
    }

    fn handle_editor_action(&mut self, action: EditorAction) {
        let Some(store) = self.store.as_mut() else {
            return;
        };

        let result = match action {
            EditorAction::None | EditorAction::Cancelled => return,
            EditorAction::Add(record) => store.add(record),
            EditorAction::Update {
                index,
                original,
                record,
            } => store.replace(index, &original, record),
        };

        match result {
            Ok(()) => {}
            Err(err @ (StoreError::Changed(_) | StoreError::NoSuchIndex(_))) => {
                warn!(error = %err, "edit target moved, change dropped");
                self.status_message = Some(StatusMessage::new(
                    "Callout list changed while editing; reopen the callout to edit it",
                    STATUS_ERROR,
                ));
            }
            Err(err) => warn!(error = %err, "callout change not persisted"),
        }
    }

    fn copy_template(&mut self, ctx: &egui::Context, template: String) {
        info!("Copying callout template to clipboard");
        ctx.copy_text(template);
        self.status_message = Some(StatusMessage::new(notice::TEMPLATE_COPIED, STATUS_OK));
    }
}

impl eframe::App for CalloutManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_notices();

        let mut list_action = ListAction::None;
        let mut open_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(PADDING);
            ui.heading("Custom Callouts");
            ui.add_space(SECTION_SPACING);

            ui.group(|ui| {
                ui.label(egui::RichText::new("Vault").strong());
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.vault_input)
                            .hint_text("Path to vault folder"),
                    );
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("📂 Open").clicked() || submitted {
                        open_requested = true;
                    }
                });

                if let Some(store) = &self.store {
                    ui.label(
                        egui::RichText::new(store.layout().snippet_path().display().to_string())
                            .monospace()
                            .weak(),
                    );
                    if !store.is_persistent() {
                        ui.colored_label(STATUS_ERROR, notice::UNSUPPORTED);
                    }
                }

                if let Some(message) = &self.status_message {
                    ui.colored_label(message.color, &message.text);
                }
            });

            ui.add_space(SECTION_SPACING);

            let Some(store) = &self.store else {
                ui.label("Open a vault to manage its callouts.");
                return;
            };

            ui.horizontal(|ui| {
                if ui.button("📋 Browse callouts").clicked() {
                    self.browser.open();
                }
                ui.toggle_value(&mut self.show_icon_styles, "Icon styles");
                ui.label(
                    egui::RichText::new(format!("{} callout types", store.cache().len())).weak(),
                );
            });

            ui.add_space(ITEM_SPACING);

            if self.show_icon_styles {
                ui.group(|ui| {
                    if store.cache().is_empty() {
                        ui.label(egui::RichText::new("No icon rules").weak());
                        return;
                    }
                    let mut styles = store.cache().stylesheet();
                    ui.add(
                        egui::TextEdit::multiline(&mut styles)
                            .code_editor()
                            .interactive(false)
                            .desired_width(f32::INFINITY),
                    );
                });
                ui.add_space(ITEM_SPACING);
            }

            ui.separator();
            ui.add_space(ITEM_SPACING);

            list_action = self.list.ui(ui, store.records(), store.cache());
        });

        if open_requested {
            self.apply_vault_input();
        }

        self.handle_list_action(list_action);

        let editor_action = self.editor.ui(ctx);
        self.handle_editor_action(editor_action);

        let picked = self
            .store
            .as_ref()
            .filter(|_| self.browser.is_open())
            .and_then(|store| self.browser.ui(ctx, store.records(), store.cache()));
        if let Some(template) = picked {
            self.copy_template(ctx, template);
        }

        ctx.request_repaint_after(Duration::from_millis(NOTICE_POLL_INTERVAL_MS));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Callout manager exiting");
    }
}

pub fn run_gui(config: AppConfig) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Custom Callouts"),
        ..Default::default()
    };

    eframe::run_native(
        "calloutx",
        options,
        Box::new(|cc| Ok(Box::new(CalloutManagerApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("Failed to launch settings window: {err}"))
}
