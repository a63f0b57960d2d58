//! "Browse callouts" picker: click an entry to get a ready-to-paste callout

use eframe::egui;

use super::callout_list::to_color32;
use crate::callout::CalloutRecord;
use crate::callout::template::callout_template;
use crate::gui::constants::*;
use crate::presentation::PresentationCache;

pub struct CalloutBrowser {
    open: bool,
    search: String,
}

impl CalloutBrowser {
    pub fn new() -> Self {
        Self {
            open: false,
            search: String::new(),
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.search.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the template for the clicked callout, closing the picker
    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        records: &[CalloutRecord],
        cache: &PresentationCache,
    ) -> Option<String> {
        if !self.open {
            return None;
        }

        let mut picked = None;
        let mut open = self.open;

        egui::Window::new("Custom callout icons")
            .open(&mut open)
            .collapsible(false)
            .default_width(BROWSE_TILE_WIDTH * 4.0)
            .show(ctx, |ui| {
                ui.add(egui::TextEdit::singleline(&mut self.search).hint_text("Search callouts"));
                ui.add_space(ITEM_SPACING);

                let matches = crate::callout::search(records, &self.search);
                if matches.is_empty() {
                    ui.label(egui::RichText::new("No matching callouts").weak());
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for record in matches {
                            // Duplicate names render with the rule that won
                            let (color, icon) = cache
                                .rule(&record.name)
                                .map_or((record.color, record.icon.as_str()), |rule| {
                                    (rule.color, rule.icon.as_str())
                                });
                            let text = egui::RichText::new(format!("{icon}\n{}", record.name))
                                .color(to_color32(color));
                            let tile = egui::Button::new(text)
                                .min_size(egui::vec2(BROWSE_TILE_WIDTH, 0.0));

                            if ui.add(tile).on_hover_text("Copy callout").clicked() {
                                picked = Some(callout_template(&record.name));
                            }
                        }
                    });
                });
            });

        self.open = open && picked.is_none();
        picked
    }
}

impl Default for CalloutBrowser {
    fn default() -> Self {
        Self::new()
    }
}
