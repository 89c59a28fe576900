//! Shared application context for the dashboard and CLI tools.

mod context;

pub use context::{AppContext, StartupError};
