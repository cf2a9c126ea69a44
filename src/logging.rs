// File-based logging via tracing. Writes to <data dir>/mixtape/mixtape.log,
// since the terminal is taken over by the player UI.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mixtape")
}

/// Install the global subscriber. Keep the returned guard alive for the
/// whole run so buffered lines reach the file.
pub fn init() -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let file_appender = rolling::never(&dir, "mixtape.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mixtape=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(filter)
        .try_init()?;

    Ok(guard)
}
