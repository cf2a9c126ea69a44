use std::path::Path;

use lofty::prelude::AudioFile;
use tracing::warn;

/// One-shot lookup of a song's total length, used only for the clock label.
pub trait DurationProbe {
    /// Whole seconds, rounded down. Failures yield `0`.
    fn probe_secs(&self, path: &Path) -> u64;
}

/// Reads the length from the file's audio properties with `lofty`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyProbe;

impl DurationProbe for LoftyProbe {
    fn probe_secs(&self, path: &Path) -> u64 {
        match lofty::read_from_path(path) {
            Ok(tagged) => tagged.properties().duration().as_secs(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read song length");
                0
            }
        }
    }
}
