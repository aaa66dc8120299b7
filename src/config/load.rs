use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file and then environment
/// variables (prefix `MELODYSTREAM`), falling back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MELODYSTREAM")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.ui.toast_ms == 0 {
            return Err("ui.toast_ms must be >= 1".to_string());
        }
        if !(1..=100).contains(&self.ui.volume_step) {
            return Err("ui.volume_step must be between 1 and 100".to_string());
        }
        if !(1..=100).contains(&self.ui.position_step) {
            return Err("ui.position_step must be between 1 and 100".to_string());
        }
        Ok(())
    }

    /// Where the log file goes: `logging.file` when set, else the XDG default.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.logging.file.clone().or_else(default_log_path)
    }
}

/// Resolve the config path from `MELODYSTREAM_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MELODYSTREAM_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/melodystream/config.toml`
/// or `~/.config/melodystream/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("melodystream").join("config.toml"))
}

/// Compute the default log path under `$XDG_STATE_HOME/melodystream/` or
/// `~/.local/state/melodystream/`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state")
        .map(|d| d.join("melodystream").join("melodystream.log"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var) {
        Some(PathBuf::from(dir))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
