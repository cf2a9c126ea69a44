use super::*;
use crate::config::LibrarySettings;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tempfile::tempdir;

static CWD_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn cwd_lock() -> std::sync::MutexGuard<'static, ()> {
    CWD_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct CwdGuard(PathBuf);

impl CwdGuard {
    fn save() -> Self {
        Self(std::env::current_dir().unwrap())
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

#[test]
fn display_name_strips_the_extension() {
    assert_eq!(display_name("Song.mp3"), "Song");
    assert_eq!(display_name("My Band - Track 01.mp3"), "My Band - Track 01");
}

#[test]
fn display_name_clamps_short_names_to_empty() {
    assert_eq!(display_name(""), "");
    assert_eq!(display_name("a"), "");
    assert_eq!(display_name(".mp3"), "");
    assert_eq!(display_name("x.mp3"), "x");
}

#[test]
fn display_name_counts_characters_not_bytes() {
    assert_eq!(display_name("Café.mp3"), "Café");
    assert_eq!(display_name("日本語.mp3"), "日本語");
    assert_eq!(display_name("日本語"), "");
}

#[test]
fn song_keeps_file_name_and_path() {
    let song = Song::new(Path::new("/music/audio/Song.mp3"));
    assert_eq!(song.file_name, "Song.mp3");
    assert_eq!(song.path, PathBuf::from("/music/audio/Song.mp3"));
    assert_eq!(song.display_name(), "Song");
}

#[test]
fn scan_keeps_only_songs_in_the_top_folder() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.mp3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("A.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join(".mp3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("notes.txt"), b"ignore me").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("deep.mp3"), b"not real").unwrap();
    fs::create_dir(dir.path().join("folder.mp3")).unwrap();

    let songs = scan(dir.path(), &LibrarySettings::default()).unwrap();
    let mut names: Vec<&str> = songs.iter().map(|s| s.file_name.as_str()).collect();
    names.sort_unstable();
    // Suffix match is exact: upper case is skipped, a bare `.mp3` is kept.
    assert_eq!(names, vec![".mp3", "b.mp3"]);
}

#[test]
fn scan_preserves_directory_listing_order() {
    let dir = tempdir().unwrap();
    for name in ["zeta.mp3", "alpha.mp3", "mid.mp3"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }

    let listed: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();

    let songs = scan(dir.path(), &LibrarySettings::default()).unwrap();
    let scanned: Vec<String> = songs.into_iter().map(|s| s.file_name).collect();
    assert_eq!(scanned, listed);
}

#[test]
fn scan_of_missing_folder_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = scan(&missing, &LibrarySettings::default()).unwrap_err();
    assert!(matches!(err, LibraryError::MissingDir(p) if p == missing));
}

#[test]
fn open_library_fails_before_touching_the_working_directory() {
    let _lock = cwd_lock();
    let before = std::env::current_dir().unwrap();

    let dir = tempdir().unwrap();
    let settings = LibrarySettings {
        dir: dir.path().join("missing").to_string_lossy().into_owned(),
        ..LibrarySettings::default()
    };
    let err = open_library(&settings).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
    assert_eq!(std::env::current_dir().unwrap(), before);
}

#[test]
fn open_library_enters_the_folder() {
    let _lock = cwd_lock();
    let _restore = CwdGuard::save();

    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Song.mp3"), b"not real").unwrap();
    let settings = LibrarySettings {
        dir: dir.path().to_string_lossy().into_owned(),
        ..LibrarySettings::default()
    };

    let (here, songs) = open_library(&settings).unwrap();
    let expected = dir.path().canonicalize().unwrap();
    assert_eq!(here.canonicalize().unwrap(), expected);
    assert_eq!(std::env::current_dir().unwrap().canonicalize().unwrap(), expected);
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].display_name(), "Song");
    assert!(Path::new("Song.mp3").exists());
}
