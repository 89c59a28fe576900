//! TOML-backed application settings.

mod errors;
mod io;
mod settings;


/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub use errors::ConfigError;
pub use io::{config_path, load_from_path, load_or_default, load_or_init, save, save_to_path};
pub use settings::{AppSettings, UiSettings};
