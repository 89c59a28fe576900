use super::charts;
use super::style;
use super::*;
use eframe::egui::{self, RichText};

impl DashboardApp {
    pub(super) fn render_confusion_section(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let evaluation = &self.state.evaluation;
        let classes = self.context.dataset().class_names();
        ui.heading("Model Confusion Matrix (Test Data)");
        ui.label(
            RichText::new(format!(
                "{} test / {} train samples, seed {}, accuracy {:.3}",
                evaluation.split.test_len,
                evaluation.split.train_len,
                evaluation.split.seed,
                evaluation.accuracy
            ))
            .color(palette.text_muted),
        );
        ui.add_space(4.0);
        egui::Grid::new("confusion_matrix")
            .striped(true)
            .num_columns(classes.len() + 1)
            .min_col_width(64.0)
            .show(ui, |ui| {
                ui.label("");
                for name in classes {
                    ui.label(RichText::new(name).strong());
                }
                ui.end_row();
                for (truth, row) in evaluation.confusion.rows().iter().enumerate() {
                    let name = classes.get(truth).map(String::as_str).unwrap_or("?");
                    ui.label(RichText::new(name).strong());
                    for count in row {
                        ui.label(count.to_string());
                    }
                    ui.end_row();
                }
            });
        ui.add_space(8.0);
        charts::confusion_heatmap(ui, &evaluation.confusion, classes);
    }

    pub(super) fn render_roc_section(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let evaluation = &self.state.evaluation;
        ui.heading("ROC Curves (One-vs-Rest)");
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for roc in &evaluation.roc {
                ui.label(
                    RichText::new(view_model::roc_legend(roc))
                        .color(style::series_color(roc.class_index())),
                );
                ui.add_space(12.0);
            }
        });
        for warning in &evaluation.warnings {
            ui.label(RichText::new(warning.to_string()).color(palette.warning));
        }
        charts::roc_chart(ui, &evaluation.roc);
    }
}
