//! UI state for the dashboard, kept free of egui types so it can be tested headless.

use crate::app::AppContext;
use crate::dataset::{Feature, FeatureVector};
use crate::pipeline::{EvaluationResult, PredictionResult};

/// Everything the renderer reads between frames.
#[derive(Clone, Debug)]
pub struct DashboardState {
    /// Current slider positions.
    pub inputs: FeatureVector,
    /// Last successful prediction, cleared when it fails.
    pub prediction: Option<PredictionResult>,
    pub prediction_error: Option<String>,
    /// Computed once when the window opens.
    pub evaluation: EvaluationResult,
    pub slider_step: f64,
}

impl DashboardState {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            inputs: ctx.default_input(),
            prediction: None,
            prediction_error: None,
            evaluation: ctx.evaluate(),
            slider_step: ctx.settings().ui.slider_step,
        }
    }

    /// Move one slider, keeping the value inside the observed range.
    pub fn set_input(&mut self, ctx: &AppContext, feature: Feature, value: f64) {
        let range = ctx.ranges()[feature.index()];
        *self.inputs.get_mut(feature) = range.clamp(value);
    }

    pub fn reset_inputs(&mut self, ctx: &AppContext) {
        self.inputs = ctx.default_input();
    }

    /// Run the prediction pipeline on the current inputs.
    pub fn run_prediction(&mut self, ctx: &AppContext) {
        match ctx.predict(&self.inputs) {
            Ok(result) => {
                self.prediction = Some(result);
                self.prediction_error = None;
            }
            Err(err) => {
                tracing::warn!("Prediction rejected: {err}");
                self.prediction = None;
                self.prediction_error = Some(err.to_string());
            }
        }
    }
}
