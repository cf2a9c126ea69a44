mod app;
mod audio;
mod config;
mod library;
mod logging;
mod runtime;
mod theme;
mod ui;

fn main() {
    let log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("mixtape: logging disabled: {e}");
            None
        }
    };

    let result = runtime::run();
    if let Err(ref e) = result {
        tracing::error!(error = %e, "mixtape exited with an error");
    }
    // Flush the log file before a possible `exit`.
    drop(log_guard);

    if let Err(e) = result {
        eprintln!("mixtape: {e}");
        std::process::exit(1);
    }
}
