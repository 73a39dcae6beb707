//! Playlist controller: playlist, pagination and playback state over a
//! pluggable media backend.
//!
//! The controller never talks to the terminal or the audio device directly.
//! User commands arrive as method calls; backend notifications arrive as
//! [`MediaEvent`]s via [`PlaylistController::pump_media_events`].

mod backend;
mod model;
mod session;

pub use backend::{MediaBackend, MediaEvent, PlaybackError};
pub use model::{PageRow, PageView, PlayButton, PlaybackState};
pub use session::PlaylistController;
