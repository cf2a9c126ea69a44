use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/mixtape/config.toml` or `~/.config/mixtape/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MIXTAPE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub player: PlayerSettings,
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Folder holding the songs. Relative paths resolve against the
    /// directory mixtape was started from.
    pub dir: String,
    /// File name suffixes to treat as songs (case-sensitive, dot optional).
    pub extensions: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: "audio".to_string(),
            extensions: vec!["mp3".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Clear the selection, song name and clock when stopping.
    pub reset_on_stop: bool,
    /// Whether a double-click on a playlist row starts that song.
    pub double_click_plays: bool,
    /// Clock refresh period (milliseconds).
    pub tick_ms: u64,
    /// Maximum gap between two clicks on the same row to count as a double-click.
    pub double_click_ms: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            reset_on_stop: false,
            double_click_plays: true,
            tick_ms: 1000,
            double_click_ms: 400,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreset {
    /// Dusty pink with plum accents.
    #[default]
    Rose,
    /// Dark background with purple playlist and orange text.
    #[serde(alias = "dark")]
    Ember,
    /// Terminal default colours.
    #[serde(alias = "plain", alias = "none")]
    Mono,
}

/// Theme selection plus per-colour overrides.
///
/// Colours accept `#rrggbb` or a named terminal colour (`red`, `darkgray`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    /// Window title shown on the outer frame.
    pub title: String,
    pub background: Option<String>,
    pub playlist_bg: Option<String>,
    pub playlist_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub accent: Option<String>,
    pub info: Option<String>,
    pub button: Option<String>,
    pub button_active: Option<String>,
    pub icons: IconSettings,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            preset: ThemePreset::default(),
            title: "Mp3 Music Player".to_string(),
            background: None,
            playlist_bg: None,
            playlist_fg: None,
            selected_bg: None,
            selected_fg: None,
            accent: None,
            info: None,
            button: None,
            button_active: None,
            icons: IconSettings::default(),
        }
    }
}

/// Glyph overrides for the transport buttons.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    pub previous: Option<String>,
    pub play: Option<String>,
    pub pause: Option<String>,
    pub stop: Option<String>,
    pub next: Option<String>,
}
