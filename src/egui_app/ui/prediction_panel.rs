use super::charts;
use super::style;
use super::*;
use eframe::egui::{self, RichText};

impl DashboardApp {
    pub(super) fn render_prediction_section(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let button = egui::Button::new(
            RichText::new("Predict Species")
                .strong()
                .color(palette.bg_primary),
        )
        .fill(palette.accent_violet);
        if ui.add(button).clicked() {
            self.state.run_prediction(&self.context);
        }
        ui.add_space(8.0);

        if let Some(err) = self.state.prediction_error.as_deref() {
            ui.label(RichText::new(format!("Invalid input: {err}")).color(palette.warning));
        }
        if let Some(result) = self.state.prediction.as_ref() {
            ui.label(
                RichText::new(view_model::prediction_headline(result))
                    .size(20.0)
                    .strong()
                    .color(palette.accent_violet),
            );
            ui.add_space(6.0);
            ui.label(RichText::new("Prediction Probabilities").strong());
            let bars: Vec<(String, f64)> = result
                .probabilities
                .iter()
                .map(|entry| (entry.class_name.clone(), entry.probability))
                .collect();
            charts::column_chart(ui, &bars, Some(result.predicted.index()));
            ui.add_space(8.0);
            ui.label(RichText::new("Feature Importance").strong());
            charts::horizontal_bars(ui, &view_model::importance_rows(result));
        }

        ui.add_space(6.0);
        egui::CollapsingHeader::new("Show input values")
            .default_open(false)
            .show(ui, |ui| {
                egui::Grid::new("input_values")
                    .striped(true)
                    .num_columns(2)
                    .show(ui, |ui| {
                        for (label, value) in view_model::input_rows(&self.state.inputs) {
                            ui.label(label);
                            ui.label(value);
                            ui.end_row();
                        }
                    });
            });
    }
}
