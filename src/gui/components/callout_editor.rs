//! Add/edit dialog for a single callout

use eframe::egui;

use crate::callout::{CalloutRecord, Rgb};
use crate::constants::callout::ICON_CATALOGUE_URL;
use crate::gui::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum EditorMode {
    Add,
    /// Position and contents of the record when the dialog opened
    Edit { index: usize, original: CalloutRecord },
}

pub struct CalloutEditor {
    mode: Option<EditorMode>,
    name: String,
    color: [u8; 3],
    icon: String,
}

impl CalloutEditor {
    pub fn new() -> Self {
        Self {
            mode: None,
            name: String::new(),
            color: Rgb::default().to_array(),
            icon: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    /// Blank form with the default green preselected
    pub fn open_add(&mut self) {
        self.mode = Some(EditorMode::Add);
        self.name.clear();
        self.color = Rgb::default().to_array();
        self.icon.clear();
    }

    /// Form prefilled from the record at `index`
    pub fn open_edit(&mut self, index: usize, record: &CalloutRecord) {
        self.mode = Some(EditorMode::Edit {
            index,
            original: record.clone(),
        });
        self.name = record.name.clone();
        self.color = record.color.to_array();
        self.icon = record.icon.clone();
    }

    pub fn close(&mut self) {
        self.mode = None;
    }

    fn record(&self) -> CalloutRecord {
        CalloutRecord::new(self.name.trim(), Rgb::from_array(self.color), self.icon.trim())
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> EditorAction {
        let Some(mode) = self.mode.clone() else {
            return EditorAction::None;
        };

        let (title, confirm) = match &mode {
            EditorMode::Add => ("Add new callout", "Add"),
            EditorMode::Edit { .. } => ("Edit callout", "Save"),
        };

        let mut action = EditorAction::None;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Callout name:");
                ui.text_edit_singleline(&mut self.name);

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    ui.label("Callout color:");
                    ui.color_edit_button_srgb(&mut self.color);
                    ui.label(
                        egui::RichText::new(Rgb::from_array(self.color).to_hex())
                            .monospace()
                            .weak(),
                    );
                });

                ui.add_space(ITEM_SPACING);

                ui.label("Callout icon:");
                ui.text_edit_singleline(&mut self.icon);
                ui.hyperlink_to("Browse Lucide.dev icons", ICON_CATALOGUE_URL);

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button(confirm).clicked() && !self.name.trim().is_empty() {
                        let record = self.record();
                        action = match &mode {
                            EditorMode::Add => EditorAction::Add(record),
                            EditorMode::Edit { index, original } => EditorAction::Update {
                                index: *index,
                                original: original.clone(),
                                record,
                            },
                        };
                    }

                    if ui.button("Cancel").clicked() {
                        action = EditorAction::Cancelled;
                    }
                });
            });

        if action != EditorAction::None {
            self.close();
        }

        action
    }
}

impl Default for CalloutEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    None,
    Cancelled,
    Add(CalloutRecord),
    /// Replace `original` at `index` with `record`
    Update {
        index: usize,
        original: CalloutRecord,
        record: CalloutRecord,
    },
}
