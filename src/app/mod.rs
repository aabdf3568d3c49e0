//! Application layer - state management and orchestration

pub mod handler;
pub mod message;
pub mod state;

use std::path::Path;

use crate::common::prelude::*;
use crate::config;
use crate::data;
use crate::tui;

/// Main application entry point
///
/// Loads configuration and the portal data snapshot, then runs the TUI.
pub fn run(data_path: Option<&Path>) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    crate::common::logging::init()?;

    let settings = config::load_settings();

    let snapshot_path = data_path
        .map(Path::to_path_buf)
        .or_else(|| settings.data.snapshot.clone());
    let snapshot = match snapshot_path {
        Some(path) => data::load_snapshot(&path)?,
        None => {
            info!("No data snapshot configured, starting with empty collections");
            Default::default()
        }
    };

    let state = state::AppState::with_settings(settings, snapshot);
    tui::run(state)
}
