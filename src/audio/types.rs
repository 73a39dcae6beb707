//! Commands understood by the audio thread.

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace the loaded media. Loading is deferred until `Play`.
    SetSource(String),
    /// Start or resume playback of the current source.
    Play,
    /// Pause playback.
    Pause,
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}
