use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::Decoder;

use super::types::{AudioError, SongSource};

/// Open and probe `path` so decode errors surface before anything is sent
/// to the audio thread.
pub(super) fn open_source(path: &Path) -> Result<SongSource, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
