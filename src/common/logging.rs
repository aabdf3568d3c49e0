//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/factoatlas/logs/`.
/// Log level is controlled by the `FACTO_LOG` environment variable.
///
/// # Examples
/// ```bash
/// FACTO_LOG=debug facto
/// FACTO_LOG=trace facto
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "facto.log");

    // Default to info, allow override via FACTO_LOG
    let env_filter = EnvFilter::try_from_env("FACTO_LOG")
        .unwrap_or_else(|_| EnvFilter::new("factoatlas=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("FactoAtlas portal starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("factoatlas").join("logs")
}
