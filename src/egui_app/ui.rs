//! egui renderer for the dashboard.

mod charts;
mod evaluation_panel;
mod explorer_panel;
mod prediction_panel;
mod sidebar;
pub mod style;

use crate::app::AppContext;
use crate::egui_app::state::DashboardState;
use crate::egui_app::view_model::{self, DatasetRow};
use eframe::egui::{self, RichText};

/// Smallest window size that keeps the side panel and charts usable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(880.0, 600.0);
pub const APP_TITLE: &str = "Iris Species Predictor";

/// Renders the dashboard from the shared context and UI state.
pub struct DashboardApp {
    context: AppContext,
    state: DashboardState,
    dataset_rows: Vec<DatasetRow>,
    visuals_set: bool,
}

impl DashboardApp {
    /// Build the UI state; the held-out evaluation runs here, once.
    pub fn new(context: AppContext) -> Self {
        let state = DashboardState::new(&context);
        let dataset_rows = view_model::dataset_rows(context.dataset());
        Self {
            context,
            state,
            dataset_rows,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_main(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.heading(RichText::new(APP_TITLE).size(26.0).strong());
        ui.label(
            RichText::new(
                "Input flower measurements to predict the Iris species using a Random Forest model.",
            )
            .color(palette.text_muted),
        );
        ui.add_space(8.0);
        self.render_prediction_section(ui);
        ui.add_space(12.0);
        ui.separator();
        self.render_explorer_section(ui);
        ui.add_space(12.0);
        ui.separator();
        self.render_confusion_section(ui);
        ui.add_space(12.0);
        ui.separator();
        self.render_roc_section(ui);
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        egui::SidePanel::left("input_features")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| self.render_sidebar(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| self.render_main(ui));
        });
    }
}

/// Minimal window shown when startup fails.
pub struct LaunchError {
    pub message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(RichText::new("Failed to start").color(style::palette().warning));
            ui.add_space(6.0);
            ui.label(&self.message);
        });
    }
}
