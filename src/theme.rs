//! Colours and button glyphs, resolved from `[theme]` settings.

use ratatui::style::Color;
use tracing::warn;

use crate::config::{IconSettings, ThemePreset, ThemeSettings};

/// Glyphs drawn on the transport buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    pub previous: String,
    pub play: String,
    pub pause: String,
    pub stop: String,
    pub next: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            previous: "⏮".to_string(),
            play: "▶".to_string(),
            pause: "⏸".to_string(),
            stop: "⏹".to_string(),
            next: "⏭".to_string(),
        }
    }
}

impl IconSet {
    fn with_overrides(mut self, o: &IconSettings) -> Self {
        let pick = |slot: &mut String, v: &Option<String>| {
            if let Some(v) = v.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                *slot = v.to_string();
            }
        };
        pick(&mut self.previous, &o.previous);
        pick(&mut self.play, &o.play);
        pick(&mut self.pause, &o.pause);
        pick(&mut self.stop, &o.stop);
        pick(&mut self.next, &o.next);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub title: String,
    pub background: Color,
    pub playlist_bg: Color,
    pub playlist_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// Frame titles and the active play button.
    pub accent: Color,
    /// Song name and clock labels.
    pub info: Color,
    pub button: Color,
    pub button_active: Color,
    pub icons: IconSet,
}

fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

impl Theme {
    pub fn preset(preset: ThemePreset) -> Self {
        let title = "Mp3 Music Player".to_string();
        let icons = IconSet::default();
        match preset {
            ThemePreset::Rose => Self {
                title,
                background: rgb(0xEACDC2),
                playlist_bg: rgb(0xDEB1AC),
                playlist_fg: rgb(0x372549),
                selected_bg: rgb(0x774C60),
                selected_fg: rgb(0xD77A61),
                accent: rgb(0x840032),
                info: rgb(0x774C60),
                button: rgb(0xEACDC2),
                button_active: rgb(0x840032),
                icons,
            },
            ThemePreset::Ember => Self {
                title,
                background: rgb(0x1E1E1E),
                playlist_bg: rgb(0x722991),
                playlist_fg: rgb(0xDE6A21),
                selected_bg: rgb(0x440C5E),
                selected_fg: rgb(0x3FA157),
                accent: rgb(0x3FA157),
                info: rgb(0xED3E88),
                button: rgb(0x962D1A),
                button_active: rgb(0x3FA157),
                icons,
            },
            ThemePreset::Mono => Self {
                title,
                background: Color::Reset,
                playlist_bg: Color::Reset,
                playlist_fg: Color::Reset,
                selected_bg: Color::Gray,
                selected_fg: Color::Black,
                accent: Color::Reset,
                info: Color::Reset,
                button: Color::Reset,
                button_active: Color::Gray,
                icons,
            },
        }
    }

    /// Start from the configured preset and apply any colour, title and glyph overrides.
    ///
    /// Unparseable colours are logged and leave the preset colour in place.
    pub fn from_settings(s: &ThemeSettings) -> Self {
        let mut theme = Self::preset(s.preset);

        if !s.title.trim().is_empty() {
            theme.title = s.title.clone();
        }

        let overrides: [(&str, &Option<String>, &mut Color); 9] = [
            ("background", &s.background, &mut theme.background),
            ("playlist_bg", &s.playlist_bg, &mut theme.playlist_bg),
            ("playlist_fg", &s.playlist_fg, &mut theme.playlist_fg),
            ("selected_bg", &s.selected_bg, &mut theme.selected_bg),
            ("selected_fg", &s.selected_fg, &mut theme.selected_fg),
            ("accent", &s.accent, &mut theme.accent),
            ("info", &s.info, &mut theme.info),
            ("button", &s.button, &mut theme.button),
            ("button_active", &s.button_active, &mut theme.button_active),
        ];
        for (name, value, slot) in overrides {
            let Some(raw) = value.as_deref() else {
                continue;
            };
            match parse_color(raw) {
                Some(c) => *slot = c,
                None => warn!(field = name, value = raw, "ignoring unknown theme colour"),
            }
        }

        theme.icons = theme.icons.with_overrides(&s.icons);
        theme
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::preset(ThemePreset::default())
    }
}

/// `#rrggbb` or a named terminal colour.
pub fn parse_color(raw: &str) -> Option<Color> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<Color>().ok()
}
