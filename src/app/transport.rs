//! Transport actions: the only operations that change what is playing.

use std::time::Instant;

use tracing::{debug, warn};

use super::model::{App, PlaybackState};
use super::ticker::ZERO_TIME_LABEL;

impl App {
    /// Play/pause button.
    ///
    /// Stopped starts the selected song (selecting the first one when
    /// nothing is selected); Playing pauses; Paused resumes without reloading.
    pub fn toggle_play_pause(&mut self) {
        match self.playback {
            PlaybackState::Stopped => {
                if !self.has_songs() {
                    return;
                }
                let index = *self.selected.get_or_insert(0);
                self.play_index(index);
            }
            PlaybackState::Playing => {
                self.mixer.pause();
                self.playback = PlaybackState::Paused;
                self.ticker.cancel();
                debug!("paused");
            }
            PlaybackState::Paused => {
                self.mixer.unpause();
                self.playback = PlaybackState::Playing;
                self.ticker.start(Instant::now());
                debug!("resumed");
            }
        }
    }

    /// Stop button. Valid from any state.
    pub fn stop(&mut self) {
        self.mixer.stop();
        self.playback = PlaybackState::Stopped;
        self.ticker.cancel();

        if self.options.reset_on_stop {
            self.selected = None;
            self.now_playing.clear();
            self.time_label = ZERO_TIME_LABEL.to_string();
            self.current_length = 0;
        }
        debug!(reset = self.options.reset_on_stop, "stopped");
    }

    /// Next button: the entry after the selection (wrapping), always played.
    pub fn next(&mut self) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.play_index((current + 1) % len);
    }

    /// Previous button: the entry before the selection (wrapping), always played.
    pub fn previous(&mut self) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.play_index((current + len - 1) % len);
    }

    /// Play `index` unconditionally (Enter on a row).
    pub fn activate(&mut self, index: usize) {
        if index < self.songs.len() {
            self.play_index(index);
        }
    }

    /// Double-click on a playlist row: plays it when enabled, otherwise
    /// behaves like a single click.
    pub fn double_click(&mut self, index: usize) {
        if self.options.double_click_plays {
            self.activate(index);
        } else {
            self.select(index);
        }
    }

    /// Move the selection without touching playback.
    pub fn select(&mut self, index: usize) {
        if index < self.songs.len() {
            self.selected = Some(index);
        }
    }

    /// Move the selection one row down, wrapping to the top.
    pub fn select_next(&mut self) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    /// Move the selection one row up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        });
    }

    /// Load and start `index`, entering Playing.
    ///
    /// On success the song name is updated, the length is re-probed and the
    /// clock restarts with an immediate tick. A load failure leaves the
    /// player stopped.
    fn play_index(&mut self, index: usize) {
        let Some(song) = self.songs.get(index) else {
            return;
        };
        let path = song.path.clone();

        self.selected = Some(index);
        self.now_playing = song.display_name().to_string();

        if let Err(e) = self.mixer.load_and_play(&path) {
            warn!(path = %path.display(), error = %e, "could not play song");
            self.mixer.stop();
            self.playback = PlaybackState::Stopped;
            self.ticker.cancel();
            self.current_length = 0;
            self.time_label = ZERO_TIME_LABEL.to_string();
            return;
        }

        self.current_length = self.probe.probe_secs(&path);
        self.playback = PlaybackState::Playing;
        self.ticker.start(Instant::now());
        debug!(index, length = self.current_length, "playing");
    }
}
