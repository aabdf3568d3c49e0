//! Configuration file parsing
//!
//! Supports `.facto/config.toml` in the user config dir or the working
//! directory.

pub mod settings;
pub mod types;

pub use settings::{load_settings, load_settings_from};
pub use types::{DataSettings, Settings, UiSettings};
