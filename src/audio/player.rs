use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;
use std::time::Instant;

use tracing::{debug, error};

use super::mixer::Mixer;
use super::source::open_source;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioError, PositionClock};

/// `rodio`-backed mixer. Output runs on a dedicated audio thread; this
/// handle lives on the UI thread and keeps the play position clock.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    clock: PositionClock,
    join: Option<JoinHandle<()>>,
}

impl AudioPlayer {
    /// Start the audio thread and wait until the output device is open.
    pub fn new() -> Result<Self, AudioError> {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(), AudioError>>();

        let join = spawn_audio_thread(rx, ready_tx);
        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                let _ = join.join();
                return Err(e);
            }
            Err(_) => return Err(AudioError::ThreadGone),
        }

        Ok(Self {
            tx,
            clock: PositionClock::default(),
            join: Some(join),
        })
    }

    fn send(&self, cmd: AudioCmd) {
        if self.tx.send(cmd).is_err() {
            error!("audio thread is gone; command dropped");
        }
    }
}

impl Mixer for AudioPlayer {
    fn load_and_play(&mut self, path: &Path) -> Result<(), AudioError> {
        let source = open_source(path)?;
        self.tx
            .send(AudioCmd::Play(source))
            .map_err(|_| AudioError::ThreadGone)?;
        self.clock.restart(Instant::now());
        debug!(path = %path.display(), "playing");
        Ok(())
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
        self.clock.pause(Instant::now());
    }

    fn unpause(&mut self) {
        self.send(AudioCmd::Unpause);
        self.clock.resume(Instant::now());
    }

    fn stop(&mut self) {
        self.send(AudioCmd::Stop);
        self.clock.stop();
    }

    fn position_ms(&self) -> u64 {
        u64::try_from(self.clock.elapsed(Instant::now()).as_millis()).unwrap_or(u64::MAX)
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        let _ = self.tx.send(AudioCmd::Quit);
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}
