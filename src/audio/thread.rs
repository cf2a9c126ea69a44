use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::thread::JoinHandle;

use rodio::{OutputStreamBuilder, Sink};
use tracing::{debug, error};

use super::types::{AudioCmd, AudioError};

/// Spawn the thread that owns the output stream and the current `Sink`.
///
/// `ready` receives exactly one message: `Ok(())` once the output device is
/// open, or the error that prevented it (the thread then exits).
pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    ready: Sender<Result<(), AudioError>>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(e) => {
                error!(error = %e, "failed to open audio output");
                let _ = ready.send(Err(AudioError::NoOutputDevice(e.to_string())));
                return;
            }
        };
        // rodio prints to stderr when the stream is dropped, which would land
        // on top of the TUI.
        stream.log_on_drop(false);
        let _ = ready.send(Ok(()));

        let mut sink: Option<Sink> = None;

        while let Ok(cmd) = rx.recv() {
            match cmd {
                AudioCmd::Play(source) => {
                    if let Some(old) = sink.take() {
                        old.stop();
                    }
                    let new_sink = Sink::connect_new(stream.mixer());
                    new_sink.append(source);
                    new_sink.play();
                    sink = Some(new_sink);
                }
                AudioCmd::Pause => {
                    if let Some(ref s) = sink {
                        s.pause();
                    }
                }
                AudioCmd::Unpause => {
                    if let Some(ref s) = sink {
                        s.play();
                    }
                }
                AudioCmd::Stop => {
                    if let Some(old) = sink.take() {
                        old.stop();
                    }
                }
                AudioCmd::Quit => {
                    if let Some(old) = sink.take() {
                        old.stop();
                    }
                    break;
                }
            }
        }

        debug!("audio thread finished");
    })
}
