use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{LibraryError, Song};

fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.'))
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{e}"))
        .collect()
}

/// Exact, case-sensitive suffix match on the file name, so `.mp3` itself
/// counts and `SONG.MP3` does not.
fn is_song_file(path: &Path, suffixes: &[String]) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())))
}

/// List the songs directly inside `dir`.
///
/// Entries keep the order the filesystem reports them in; nothing is sorted
/// and subdirectories are not entered.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Song>, LibraryError> {
    if !dir.is_dir() {
        return Err(LibraryError::MissingDir(dir.to_path_buf()));
    }

    let suffixes = normalized_extensions(settings);
    let songs: Vec<Song> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && is_song_file(e.path(), &suffixes))
        .map(|e| Song::new(e.path()))
        .collect();

    debug!(dir = %dir.display(), count = songs.len(), "scanned audio folder");
    Ok(songs)
}

/// Enter the configured audio folder and scan it.
///
/// The process working directory moves into the folder, so every later
/// relative file operation resolves inside it. Returns the absolute folder
/// path together with the playlist.
pub fn open_library(settings: &LibrarySettings) -> Result<(PathBuf, Vec<Song>), LibraryError> {
    let dir = PathBuf::from(&settings.dir);
    if !dir.is_dir() {
        return Err(LibraryError::MissingDir(dir));
    }

    env::set_current_dir(&dir).map_err(|source| LibraryError::Io {
        path: dir.clone(),
        source,
    })?;
    let here = env::current_dir().map_err(|source| LibraryError::Io {
        path: dir.clone(),
        source,
    })?;

    let songs = scan(&here, settings)?;
    info!(dir = %here.display(), songs = songs.len(), "library loaded");
    Ok((here, songs))
}
