#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based Iris dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use irisview::app::AppContext;
use irisview::config::{self, AppSettings};
use irisview::egui_app::ui::{APP_TITLE, DashboardApp, LaunchError, MIN_VIEWPORT_SIZE};
use irisview::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match config::load_or_init() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Config unavailable, using defaults: {err}");
            AppSettings::default()
        }
    };
    if let Err(err) = logging::init(&settings.log_filter) {
        eprintln!("Logging disabled: {err}");
    }

    let context = AppContext::load(&settings);
    if let Err(err) = &context {
        tracing::error!("Startup failed: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1180.0, 860.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |_cc| {
            let app: Box<dyn eframe::App> = match context {
                Ok(context) => Box::new(DashboardApp::new(context)),
                Err(err) => Box::new(LaunchError {
                    message: err.to_string(),
                }),
            };
            Ok(app)
        }),
    )?;
    Ok(())
}
