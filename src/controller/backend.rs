//! The contract between the controller and whatever actually plays audio.

use std::path::PathBuf;

use thiserror::Error;

use crate::http::HttpError;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("audio thread is not running")]
    Disconnected,
    #[error("no media source selected")]
    NoSource,
    #[error("no audio output device: {0}")]
    NoDevice(String),
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: HttpError,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {url}: {message}")]
    Decode { url: String, message: String },
}

/// Notifications raised by the media backend, in the order they happen.
#[derive(Debug)]
pub enum MediaEvent {
    /// Playback started or resumed.
    Play,
    /// Playback paused, either on request or because the track finished.
    Pause,
    /// The current track played to the end. Always preceded by `Pause`.
    Ended,
    /// A play request could not be honoured.
    Failed(PlaybackError),
}

/// A single media output, exclusively owned by the controller.
pub trait MediaBackend {
    /// Select the media to play next. Stops whatever is currently loaded.
    fn set_source(&mut self, url: &str);

    /// Start or resume playback of the current source.
    ///
    /// Errors returned here are the ones known synchronously; failures found
    /// while loading arrive later as [`MediaEvent::Failed`].
    fn play(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Next pending event, if any. Never blocks.
    fn poll_event(&mut self) -> Option<MediaEvent>;
}
