use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::display::display_name;

/// One playlist entry.
///
/// `file_name` is the directory-relative name and the key used for display;
/// `path` is what gets handed to the mixer and the duration probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub file_name: String,
    pub path: PathBuf,
}

impl Song {
    pub fn new(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            file_name,
            path: path.to_path_buf(),
        }
    }

    pub fn display_name(&self) -> &str {
        display_name(&self.file_name)
    }
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("audio folder {} does not exist", .0.display())]
    MissingDir(PathBuf),

    #[error("cannot open audio folder {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
