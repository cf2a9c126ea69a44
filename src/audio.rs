//! Audio backend: the `Mixer` seam the transport talks to, its `rodio`
//! implementation, and the `lofty` duration probe.

mod mixer;
mod player;
mod probe;
mod source;
mod thread;
mod types;

pub use mixer::Mixer;
pub use player::AudioPlayer;
pub use probe::{DurationProbe, LoftyProbe};
pub use types::AudioError;

#[cfg(test)]
mod tests;
