//! Settings parser for .facto/config.toml

use super::types::Settings;
use crate::common::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const FACTO_DIR: &str = ".facto";

/// Load settings from `.facto/config.toml` under the user config dir,
/// falling back to the current directory.
///
/// Returns default settings if no file exists or it can't be parsed.
pub fn load_settings() -> Settings {
    let candidates = [
        dirs::config_dir().map(|d| d.join(FACTO_DIR).join(CONFIG_FILENAME)),
        Some(PathBuf::from(FACTO_DIR).join(CONFIG_FILENAME)),
    ];

    for path in candidates.into_iter().flatten() {
        if path.exists() {
            return load_settings_from(&path);
        }
    }

    debug!("No config file found, using defaults");
    Settings::default()
}

/// Parse a specific settings file, defaulting on any failure
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_settings_from_parses_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[ui]
narrow_breakpoint = 100
recent_activities = 6

[data]
snapshot = "/var/lib/facto/portal.json"
"#
        )
        .unwrap();

        let settings = load_settings_from(file.path());

        assert_eq!(settings.ui.narrow_breakpoint, 100);
        assert_eq!(settings.ui.recent_activities, 6);
        assert_eq!(
            settings.data.snapshot,
            Some(PathBuf::from("/var/lib/facto/portal.json"))
        );
    }

    #[test]
    fn test_load_settings_from_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nnarrow_breakpoint = 90").unwrap();

        let settings = load_settings_from(file.path());

        assert_eq!(settings.ui.narrow_breakpoint, 90);
        assert_eq!(settings.ui.recent_activities, 4);
        assert_eq!(settings.data.snapshot, None);
    }

    #[test]
    fn test_load_settings_from_invalid_toml_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [[[").unwrap();

        let settings = load_settings_from(file.path());

        assert_eq!(settings.ui.narrow_breakpoint, 80);
    }

    #[test]
    fn test_load_settings_from_missing_file_defaults() {
        let settings = load_settings_from(Path::new("/nonexistent/config.toml"));
        assert_eq!(settings.ui.recent_activities, 4);
    }
}
