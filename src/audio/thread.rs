use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, info};

use crate::config::AudioSettings;
use crate::controller::{MediaEvent, PlaybackError};

use super::sink::create_sink;
use super::types::AudioCmd;

const TICK: Duration = Duration::from_millis(200);

fn open_stream() -> Result<OutputStream, String> {
    let mut stream = OutputStreamBuilder::open_default_stream().map_err(|e| e.to_string())?;
    // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
    // but noisy for a TUI app.
    stream.log_on_drop(false);
    Ok(stream)
}

fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    sink.set_volume(1.0);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(1.0 - t);
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}

/// What the audio loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Quit,
}

/// Playback state owned by the audio thread. Independent of the output
/// device so the command protocol can be driven directly.
pub(super) struct AudioWorker {
    pub(super) source: Option<String>,
    pub(super) sink: Option<Sink>,
    pub(super) playing: bool,
    events: Sender<MediaEvent>,
    settings: AudioSettings,
}

impl AudioWorker {
    pub(super) fn new(events: Sender<MediaEvent>, settings: AudioSettings) -> Self {
        Self {
            source: None,
            sink: None,
            playing: false,
            events,
            settings,
        }
    }

    fn emit(&self, event: MediaEvent) {
        let _ = self.events.send(event);
    }

    /// Apply one command. `stream` is the output device, or why it could not be opened.
    pub(super) fn handle(&mut self, cmd: AudioCmd, stream: Result<&OutputStream, &str>) -> Flow {
        match cmd {
            AudioCmd::SetSource(url) => {
                if let Some(s) = self.sink.take() {
                    s.stop();
                }
                if self.playing {
                    self.playing = false;
                    self.emit(MediaEvent::Pause);
                }
                debug!(url = %url, "source set");
                self.source = Some(url);
            }

            AudioCmd::Play => self.play(stream),

            AudioCmd::Pause => {
                if let Some(ref s) = self.sink {
                    if self.playing {
                        s.pause();
                        self.playing = false;
                        self.emit(MediaEvent::Pause);
                    }
                }
            }

            AudioCmd::Quit { fade_out_ms } => {
                if let Some(ref s) = self.sink {
                    // Fade out gently before stopping.
                    fade_out_sink(s, fade_out_ms);
                    s.stop();
                }
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn play(&mut self, stream: Result<&OutputStream, &str>) {
        if self.playing {
            return;
        }

        if self.sink.is_none() {
            let Some(url) = self.source.as_deref() else {
                self.emit(MediaEvent::Failed(PlaybackError::NoSource));
                return;
            };
            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    self.emit(MediaEvent::Failed(PlaybackError::NoDevice(e.to_string())));
                    return;
                }
            };
            match create_sink(stream, url, &self.settings) {
                Ok(s) => {
                    info!(url = %url, "media loaded");
                    self.sink = Some(s);
                }
                Err(err) => {
                    debug!(url = %url, error = %err, "media failed to load");
                    self.emit(MediaEvent::Failed(err));
                    return;
                }
            }
        }

        if let Some(ref s) = self.sink {
            s.play();
            self.playing = true;
            self.emit(MediaEvent::Play);
        }
    }

    /// Periodic check for the end of the current track.
    pub(super) fn tick(&mut self) {
        let finished = self.playing && self.sink.as_ref().is_some_and(|s| s.empty());
        if finished {
            self.sink = None;
            self.playing = false;
            self.emit(MediaEvent::Pause);
            self.emit(MediaEvent::Ended);
        }
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<MediaEvent>,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = open_stream().inspect_err(|e| error!(error = %e, "no audio output device"));
        let mut worker = AudioWorker::new(events, audio_settings);

        loop {
            match rx.recv_timeout(TICK) {
                Ok(cmd) => {
                    if worker.handle(cmd, stream.as_ref().map_err(String::as_str)) == Flow::Quit {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => worker.tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
