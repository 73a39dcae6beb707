//! Audio output: a rodio-backed [`MediaBackend`](crate::controller::MediaBackend).
//!
//! The heavy lifting (download, decode, playback) happens on a dedicated
//! thread; `AudioPlayer` only sends commands and relays events.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
