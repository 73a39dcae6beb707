use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use crate::config::AudioSettings;
use crate::controller::{MediaBackend, MediaEvent, PlaybackError};

use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

/// rodio-backed media output. Commands go to a dedicated audio thread;
/// its notifications come back through [`MediaBackend::poll_event`].
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    events: Receiver<MediaEvent>,
    paused: bool,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(audio_settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<MediaEvent>();

        let audio_handle = spawn_audio_thread(rx, event_tx, audio_settings);

        Self::from_parts(tx, event_rx, Some(audio_handle))
    }

    fn from_parts(
        tx: Sender<AudioCmd>,
        events: Receiver<MediaEvent>,
        join: Option<JoinHandle<()>>,
    ) -> Self {
        Self {
            tx,
            events,
            paused: true,
            join: Mutex::new(join),
        }
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    /// Fade out over `fade_out_ms`, stop the audio thread and wait for it.
    pub fn quit_softly(&self, fade_out_ms: u64) {
        let _ = self.send(AudioCmd::Quit { fade_out_ms });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl MediaBackend for AudioPlayer {
    fn set_source(&mut self, url: &str) {
        let _ = self.send(AudioCmd::SetSource(url.to_string()));
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        self.send(AudioCmd::Play)
            .map_err(|_| PlaybackError::Disconnected)?;
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        let _ = self.send(AudioCmd::Pause);
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        let event = self.events.try_recv().ok()?;
        match event {
            MediaEvent::Play => self.paused = false,
            MediaEvent::Pause | MediaEvent::Failed(_) => self.paused = true,
            MediaEvent::Ended => {}
        }
        Some(event)
    }
}

#[cfg(test)]
pub(super) fn detached() -> (AudioPlayer, Receiver<AudioCmd>, Sender<MediaEvent>) {
    let (tx, rx) = mpsc::channel::<AudioCmd>();
    let (event_tx, event_rx) = mpsc::channel::<MediaEvent>();
    (AudioPlayer::from_parts(tx, event_rx, None), rx, event_tx)
}
