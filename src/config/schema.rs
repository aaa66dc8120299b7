use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/melodystream/config.toml` or
/// `~/.config/melodystream/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MELODYSTREAM__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Product name shown in headers and on the landing screen.
    pub header_text: String,
    /// Line shown under the product name on the landing and login screens.
    pub tagline: String,
    /// How long a notification stays on screen (milliseconds).
    pub toast_ms: u64,
    /// Volume change per keypress, in percent.
    pub volume_step: u8,
    /// Position change per keypress, in percent of the track.
    pub position_step: u8,

    /// Which track fields to show in the player bar, and in what order.
    ///
    /// Example: ["title", "artist"]
    pub now_playing_fields: Vec<TrackDisplayField>,
    /// Separator used to join `now_playing_fields`.
    pub now_playing_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "MelodyStream".to_string(),
            tagline: "Your Music, Your World".to_string(),
            toast_ms: 3000,
            volume_step: 5,
            position_step: 5,
            now_playing_fields: vec![TrackDisplayField::Title, TrackDisplayField::Artist],
            now_playing_separator: " by ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    Album,
    Genre,
    Duration,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Optional TOML file with `[[tracks]]` entries replacing the sample catalog.
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` wins when set.
    pub level: String,
    pub format: LogFormat,
    /// Log file location. Defaults to the XDG state directory.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}

/// Log output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[serde(alias = "text", alias = "plain")]
    Pretty,
    /// One JSON object per line.
    Json,
}
