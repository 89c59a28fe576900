use super::style;
use super::*;
use crate::dataset::Feature;
use eframe::egui::{self, RichText, SliderClamping};

impl DashboardApp {
    pub(super) fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.add_space(6.0);
        ui.heading("Input Features");
        ui.add_space(6.0);
        for feature in Feature::ALL {
            let range = self.context.ranges()[feature.index()];
            let mut value = self.state.inputs.get(feature);
            ui.label(RichText::new(feature.label()).color(palette.text_primary));
            let slider = egui::Slider::new(&mut value, range.min..=range.max)
                .step_by(self.state.slider_step)
                .fixed_decimals(2)
                .clamping(SliderClamping::Always);
            if ui.add(slider).changed() {
                self.state.set_input(&self.context, feature, value);
            }
            ui.label(
                RichText::new(format!("{:.1} to {:.1}", range.min, range.max))
                    .small()
                    .color(palette.text_muted),
            );
            ui.add_space(4.0);
        }
        ui.add_space(6.0);
        if ui.button("Reset to means").clicked() {
            self.state.reset_inputs(&self.context);
        }
    }
}
