use eframe::egui;

use crate::callout::{CalloutRecord, Rgb};
use crate::gui::constants::*;
use crate::presentation::PresentationCache;

pub struct CalloutList {
    search: String,
    pending_delete: Option<String>,
}

impl CalloutList {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            pending_delete: None,
        }
    }

    /// `(index, record)` pairs matching the current search, indices into `records`
    fn visible<'a>(&self, records: &'a [CalloutRecord]) -> Vec<(usize, &'a CalloutRecord)> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.matches_search(&self.search))
            .collect()
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        records: &[CalloutRecord],
        cache: &PresentationCache,
    ) -> ListAction {
        let mut action = ListAction::None;

        ui.horizontal(|ui| {
            ui.label("\u{1F50D}");
            ui.add(egui::TextEdit::singleline(&mut self.search).hint_text("Search callouts"));

            if ui.button("➕ Add callout").clicked() {
                action = ListAction::Add;
            }
        });

        ui.add_space(ITEM_SPACING);

        let visible = self.visible(records);
        if visible.is_empty() {
            ui.label(egui::RichText::new("No callouts").weak());
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, record) in visible {
                ui.horizontal(|ui| {
                    // Preview color comes from the generated icon rules
                    let color = cache.color_for(&record.name).unwrap_or(record.color);
                    swatch(ui, color);

                    ui.label(egui::RichText::new(&record.name).strong());
                    ui.label(egui::RichText::new(format!("({})", record.icon)).color(to_color32(color)));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("🗑 Delete").clicked() {
                            self.pending_delete = Some(record.name.clone());
                        }
                        if ui.button("✏ Edit").clicked() {
                            action = ListAction::Edit(index);
                        }
                    });
                });
            }
        });

        if self.pending_delete.is_some() {
            let confirmed = self.delete_confirm_dialog(ui.ctx());
            if let Some(name) = confirmed {
                action = ListAction::Delete(name);
            }
        }

        action
    }

    fn delete_confirm_dialog(&mut self, ctx: &egui::Context) -> Option<String> {
        let name = self.pending_delete.clone()?;
        let mut confirmed = None;

        egui::Window::new("Delete callout")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Delete every callout named '{name}'?"));

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        confirmed = Some(name.clone());
                        self.pending_delete = None;
                    }

                    if ui.button("Cancel").clicked() {
                        self.pending_delete = None;
                    }
                });
            });

        confirmed
    }
}

impl Default for CalloutList {
    fn default() -> Self {
        Self::new()
    }
}

pub fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.red, color.green, color.blue)
}

fn swatch(ui: &mut egui::Ui, color: Rgb) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::hover());
    ui.painter().rect_filled(rect, 3.0, to_color32(color));
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    None,
    Add,
    Edit(usize),
    /// Remove every record with this name
    Delete(String),
}
