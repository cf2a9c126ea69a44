use std::path::Path;

use super::types::AudioError;

/// Playback operations the transport controller relies on.
///
/// Calls are synchronous from the caller's point of view: `load_and_play`
/// either starts the song or returns the reason it could not. There are no
/// callbacks; end of track is never reported.
pub trait Mixer {
    /// Replace whatever is playing with the file at `path` and start it.
    fn load_and_play(&mut self, path: &Path) -> Result<(), AudioError>;
    fn pause(&mut self);
    fn unpause(&mut self);
    fn stop(&mut self);
    /// Milliseconds since the current song started, paused time excluded.
    fn position_ms(&self) -> u64;
}
