//! Configuration types for the portal

use serde::Deserialize;
use std::path::PathBuf;

/// Global application settings from `.facto/config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub data: DataSettings,
}

/// UI tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Terminal width (columns) below which the layout is narrow:
    /// the sidebar overlays the content and auto-closes on navigation
    pub narrow_breakpoint: u16,

    /// How many recent activities the dashboard and overlay show
    pub recent_activities: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 80,
            recent_activities: 4,
        }
    }
}

/// Data provider wiring
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Default path of the portal data snapshot (JSON)
    pub snapshot: Option<PathBuf>,
}
