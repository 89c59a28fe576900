use super::*;
use crate::dataset::Feature;
use eframe::egui::{self, RichText};

const EXPLORER_HEIGHT: f32 = 280.0;

impl DashboardApp {
    pub(super) fn render_explorer_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Iris Dataset Explorer");
        ui.label(
            RichText::new(format!("{} samples", self.dataset_rows.len()))
                .color(style::palette().text_muted),
        );
        ui.add_space(4.0);
        egui::ScrollArea::vertical()
            .id_salt("dataset_explorer_scroll")
            .max_height(EXPLORER_HEIGHT)
            .show(ui, |ui| {
                egui::Grid::new("dataset_explorer")
                    .striped(true)
                    .num_columns(Feature::ALL.len() + 2)
                    .min_col_width(48.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new("#").strong());
                        for feature in Feature::ALL {
                            ui.label(RichText::new(feature.label()).strong());
                        }
                        ui.label(RichText::new("species").strong());
                        ui.end_row();
                        for (idx, row) in self.dataset_rows.iter().enumerate() {
                            ui.label(idx.to_string());
                            for value in &row.values {
                                ui.label(value);
                            }
                            ui.label(&row.species);
                            ui.end_row();
                        }
                    });
            });
    }
}
