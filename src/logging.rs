//! Diagnostic logging to a file.
//!
//! The terminal belongs to the TUI, so everything goes through a
//! non-blocking file writer. `RUST_LOG` overrides the configured level.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, default_state_dir};

/// Directory the log file is written to.
pub fn log_dir(settings: &LogSettings) -> PathBuf {
    settings
        .directory
        .clone()
        .or_else(default_state_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn env_filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the program or buffered lines are lost.
pub fn init(settings: &LogSettings) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let dir = log_dir(settings);
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::never(&dir, &settings.file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(env_filter(settings))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_prefers_configured_directory() {
        let settings = LogSettings {
            directory: Some(PathBuf::from("/tmp/trackfeed-logs")),
            ..LogSettings::default()
        };
        assert_eq!(log_dir(&settings), PathBuf::from("/tmp/trackfeed-logs"));
    }

    #[test]
    fn invalid_level_falls_back_to_info() {
        let settings = LogSettings {
            level: "[[not a directive".to_string(),
            ..LogSettings::default()
        };
        // RUST_LOG may be set in the environment running the tests; either way
        // building the filter must not panic.
        let _ = env_filter(&settings);
    }
}
