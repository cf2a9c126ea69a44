//! Audio-related small types: commands for the audio thread, errors and the
//! play position clock.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rodio::Decoder;
use thiserror::Error;

pub(super) type SongSource = Decoder<BufReader<File>>;

pub(super) enum AudioCmd {
    /// Start playing an already opened source, replacing the current one.
    Play(SongSource),
    Pause,
    Unpause,
    Stop,
    /// Stop playback and end the audio thread.
    Quit,
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    NoOutputDevice(String),

    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    #[error("audio thread is not running")]
    ThreadGone,
}

/// Wall-clock play position that only advances while playing.
///
/// Every method takes `now` so the arithmetic stays deterministic.
#[derive(Debug, Clone, Default)]
pub struct PositionClock {
    started_at: Option<Instant>,
    accumulated: Duration,
    loaded: bool,
}

impl PositionClock {
    /// A new song started at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.accumulated = Duration::ZERO;
        self.loaded = true;
    }

    pub fn pause(&mut self, now: Instant) {
        if let Some(st) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(st);
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if self.loaded && self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.accumulated
            + self
                .started_at
                .map_or(Duration::ZERO, |st| now.saturating_duration_since(st))
    }
}
