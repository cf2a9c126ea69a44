//! Application model types: `App`, `PlaybackState` and the transport options.

use std::time::{Duration, Instant};

use crate::audio::{DurationProbe, Mixer};
use crate::config::PlayerSettings;
use crate::library::Song;

use super::ticker::{Ticker, ZERO_TIME_LABEL, time_label};

/// The playback state of the application.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Small behaviour toggles for the transport.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransportOptions {
    /// Stop also clears the selection, the song name and the clock.
    pub reset_on_stop: bool,
    /// A double-click on a playlist row plays it.
    pub double_click_plays: bool,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            reset_on_stop: false,
            double_click_plays: true,
        }
    }
}

impl From<&PlayerSettings> for TransportOptions {
    fn from(s: &PlayerSettings) -> Self {
        Self {
            reset_on_stop: s.reset_on_stop,
            double_click_plays: s.double_click_plays,
        }
    }
}

/// The main application model.
pub struct App {
    pub songs: Vec<Song>,
    pub selected: Option<usize>,
    pub playback: PlaybackState,
    /// Song name label.
    pub now_playing: String,
    /// `MM:SS / MM:SS` label.
    pub time_label: String,
    /// Total length of the current song in whole seconds, cached at play time.
    pub current_length: u64,
    pub ticker: Ticker,
    pub options: TransportOptions,
    pub current_dir: Option<String>,

    pub(super) mixer: Box<dyn Mixer>,
    pub(super) probe: Box<dyn DurationProbe>,
}

impl App {
    /// Create a new `App` over `songs`, driving `mixer` and asking `probe` for song lengths.
    pub fn new(
        songs: Vec<Song>,
        mixer: Box<dyn Mixer>,
        probe: Box<dyn DurationProbe>,
        options: TransportOptions,
        tick_period: Duration,
    ) -> Self {
        Self {
            songs,
            selected: None,
            playback: PlaybackState::Stopped,
            now_playing: String::new(),
            time_label: ZERO_TIME_LABEL.to_string(),
            current_length: 0,
            ticker: Ticker::new(tick_period),
            options,
            current_dir: None,
            mixer,
            probe,
        }
    }

    /// Record the audio folder in the app state.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    /// Return true if the playlist contains any songs.
    pub fn has_songs(&self) -> bool {
        !self.songs.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    /// Refresh the clock label from the mixer position.
    ///
    /// Only does work while playing. The ticker is re-armed while the song
    /// has time left and cancelled once the elapsed time reaches the cached
    /// length (no end-of-track event exists, so this is where ticking ends).
    pub fn tick(&mut self, now: Instant) {
        if self.playback != PlaybackState::Playing {
            self.ticker.cancel();
            return;
        }

        let elapsed = self.mixer.position_ms() / 1000;
        self.time_label = time_label(elapsed, self.current_length);

        if elapsed < self.current_length {
            self.ticker.reschedule(now);
        } else {
            self.ticker.cancel();
        }
    }

    /// Run the tick if it is due. Returns whether it ran.
    pub fn poll_ticker(&mut self, now: Instant) -> bool {
        if self.ticker.is_due(now) {
            self.tick(now);
            true
        } else {
            false
        }
    }
}
