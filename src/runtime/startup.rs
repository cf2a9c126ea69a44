use std::time::Duration;

use tracing::info;

use crate::app::{App, TransportOptions};
use crate::audio::{AudioPlayer, LoftyProbe};
use crate::config;
use crate::library::open_library;

/// Enter the audio folder, open the output device and build the player.
///
/// A missing folder or audio device is fatal; there is nothing to play.
pub fn build_app(
    settings: &config::Settings,
    dir_override: Option<String>,
) -> Result<App, Box<dyn std::error::Error>> {
    let mut library = settings.library.clone();
    if let Some(dir) = dir_override {
        library.dir = dir;
    }

    let (dir, songs) = open_library(&library)?;
    let mixer = AudioPlayer::new()?;

    let mut app = App::new(
        songs,
        Box::new(mixer),
        Box::new(LoftyProbe),
        TransportOptions::from(&settings.player),
        Duration::from_millis(settings.player.tick_ms),
    );
    app.set_current_dir(dir.display().to_string());

    info!(
        dir = %dir.display(),
        songs = app.songs.len(),
        reset_on_stop = app.options.reset_on_stop,
        double_click_plays = app.options.double_click_plays,
        "player ready"
    );
    Ok(app)
}
