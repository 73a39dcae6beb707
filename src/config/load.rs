use std::{env, path::PathBuf};

use chrono::format::{Item, StrftimeItems};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `TRACKFEED__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TRACKFEED")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.playlist.page_size == 0 {
            return Err("playlist.page_size must be >= 1".to_string());
        }
        if self.manifest.source.trim().is_empty() {
            return Err("manifest.source must not be empty".to_string());
        }
        if self.manifest.connect_timeout_ms == 0 || self.manifest.read_timeout_ms == 0 {
            return Err("manifest timeouts must be >= 1ms".to_string());
        }
        if self.audio.connect_timeout_ms == 0 || self.audio.read_timeout_ms == 0 {
            return Err("audio timeouts must be >= 1ms".to_string());
        }
        let fmt = self.playlist.date_format.as_str();
        if fmt.is_empty() || StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
            return Err(format!("playlist.date_format is not a valid format: {fmt:?}"));
        }
        Ok(())
    }
}

/// Resolve the config path from `TRACKFEED_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TRACKFEED_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/trackfeed/config.toml`
/// or `~/.config/trackfeed/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("trackfeed").join("config.toml"))
}

/// Compute the default log directory under `$XDG_STATE_HOME/trackfeed`
/// or `~/.local/state/trackfeed`.
pub fn default_state_dir() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("state"))
    } else {
        None
    };

    state_home.map(|d| d.join("trackfeed"))
}
