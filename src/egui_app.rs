//! egui dashboard: headless UI state, view helpers, and the renderer.

pub mod state;
pub mod ui;
pub mod view_model;
