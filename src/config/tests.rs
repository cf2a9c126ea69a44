use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_mixtape_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MIXTAPE_CONFIG_PATH", "/tmp/mixtape-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/mixtape-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("mixtape")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("mixtape")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_the_shipped_player() {
    let s = Settings::default();
    assert_eq!(s.library.dir, "audio");
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.player.reset_on_stop);
    assert!(s.player.double_click_plays);
    assert_eq!(s.player.tick_ms, 1000);
    assert_eq!(s.theme.preset, ThemePreset::Rose);
    assert_eq!(s.theme.title, "Mp3 Music Player");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_preset_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r##"
[library]
dir = "songs"
extensions = ["mp3", "ogg"]

[player]
reset_on_stop = true
double_click_plays = false
tick_ms = 500

[theme]
preset = "dark"
title = "Night Player"
accent = "#ff0000"

[theme.icons]
play = ">"
"##,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MIXTAPE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MIXTAPE__PLAYER__TICK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.dir, "songs");
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "ogg".to_string()]);
    assert!(s.player.reset_on_stop);
    assert!(!s.player.double_click_plays);
    assert_eq!(s.player.tick_ms, 500);
    assert_eq!(s.player.double_click_ms, 400);
    assert_eq!(s.theme.preset, ThemePreset::Ember);
    assert_eq!(s.theme.title, "Night Player");
    assert_eq!(s.theme.accent.as_deref(), Some("#ff0000"));
    assert_eq!(s.theme.background, None);
    assert_eq!(s.theme.icons.play.as_deref(), Some(">"));
    assert_eq!(s.theme.icons.pause, None);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
tick_ms = 1000
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MIXTAPE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MIXTAPE__PLAYER__TICK_MS", "250");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.tick_ms, 250);
}

#[test]
fn validate_rejects_zero_tick_and_empty_extensions() {
    let mut s = Settings::default();
    s.player.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions = vec![" . ".into(), String::new()];
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.dir = "  ".into();
    assert!(s.validate().is_err());
}
