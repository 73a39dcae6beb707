use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/trackfeed/config.toml` or `~/.config/trackfeed/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKFEED__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub manifest: ManifestSettings,
    pub playlist: PlaylistSettings,
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ManifestSettings {
    /// Where the manifest lives: an `http(s)://` url or a local path.
    /// The first command line argument overrides it.
    pub source: String,
    /// TCP connect timeout for remote manifests (milliseconds).
    pub connect_timeout_ms: u64,
    /// Read timeout for remote manifests (milliseconds).
    pub read_timeout_ms: u64,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            source: "audio.txt".to_string(),
            connect_timeout_ms: 5_000,
            read_timeout_ms: 15_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Rows added by each "load more".
    pub page_size: usize,
    /// strftime-style format used for the timestamp column.
    pub date_format: String,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            page_size: 5,
            date_format: "%Y/%m/%d %H:%M".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
    /// TCP connect timeout when downloading a remote track (milliseconds).
    pub connect_timeout_ms: u64,
    /// Read timeout when downloading a remote track (milliseconds).
    pub read_timeout_ms: u64,
    /// Largest track body we are willing to buffer in memory.
    pub max_track_bytes: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            quit_fade_out_ms: 500,
            connect_timeout_ms: 5_000,
            read_timeout_ms: 60_000,
            max_track_bytes: 256 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ trackfeed ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive, e.g. `info` or `trackfeed=debug`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Directory for the log file. Defaults to the XDG state directory.
    pub directory: Option<PathBuf>,
    pub file_name: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_name: "trackfeed.log".to_string(),
        }
    }
}
