//! Utilities for creating `rodio` sinks from track urls.
//!
//! The helpers here encapsulate fetching or opening the media, decoding it
//! and preparing a paused `Sink`.

use std::io::Cursor;
use std::path::PathBuf;

use rodio::{Decoder, OutputStream, Sink};

use crate::config::AudioSettings;
use crate::controller::PlaybackError;
use crate::http::{self, Timeouts};

/// Read the whole media body for `url` into memory.
///
/// `http(s)://` urls are downloaded, `file://` urls and plain paths are read
/// from disk.
pub(super) fn load_media(url: &str, settings: &AudioSettings) -> Result<Vec<u8>, PlaybackError> {
    if url.trim().is_empty() {
        return Err(PlaybackError::NoSource);
    }

    if http::is_remote(url) {
        let timeouts = Timeouts::from_millis(settings.connect_timeout_ms, settings.read_timeout_ms);
        return http::get_bytes(url, timeouts, settings.max_track_bytes).map_err(|source| {
            PlaybackError::Fetch {
                url: url.to_string(),
                source,
            }
        });
    }

    let path = PathBuf::from(url.strip_prefix("file://").unwrap_or(url));
    std::fs::read(&path).map_err(|source| PlaybackError::Io { path, source })
}

/// Create a paused `Sink` playing `url` on `stream`.
pub(super) fn create_sink(
    stream: &OutputStream,
    url: &str,
    settings: &AudioSettings,
) -> Result<Sink, PlaybackError> {
    let bytes = load_media(url, settings)?;
    let source = Decoder::new(Cursor::new(bytes)).map_err(|err| PlaybackError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
