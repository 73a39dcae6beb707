use tracing::{debug, error, info, warn};

use crate::config::PlaylistSettings;
use crate::playlist::{ManifestSource, Track, parse_manifest};

use super::backend::{MediaBackend, MediaEvent};
use super::model::{PageRow, PageView, PaginationState, PlayButton, PlaybackState};

/// Owns the playlist, its pagination and the media backend, and turns user
/// commands and media events into playback transitions.
pub struct PlaylistController<B: MediaBackend> {
    backend: B,
    source: Box<dyn ManifestSource>,
    playlist: Vec<Track>,
    playback: PlaybackState,
    pagination: PaginationState,
    date_format: String,
}

impl<B: MediaBackend> PlaylistController<B> {
    pub fn new(backend: B, source: Box<dyn ManifestSource>, settings: &PlaylistSettings) -> Self {
        Self {
            backend,
            source,
            playlist: Vec::new(),
            playback: PlaybackState::default(),
            pagination: PaginationState::new(settings.page_size),
            date_format: settings.date_format.clone(),
        }
    }

    /// Load the manifest and reveal the first page.
    pub fn init(&mut self) {
        self.load_playlist();
        self.load_more_items();
    }

    /// Fetch and parse the manifest, replacing the playlist.
    ///
    /// Failures are logged and leave an empty playlist. Returns the number of
    /// tracks loaded.
    pub fn load_playlist(&mut self) -> usize {
        let tracks = match self.source.fetch() {
            Ok(text) => {
                let parsed = parse_manifest(&text);
                for skipped in &parsed.skipped {
                    warn!(error = %skipped, "skipping malformed manifest line");
                }
                parsed.tracks
            }
            Err(err) => {
                error!(error = %err, "failed to load playlist");
                Vec::new()
            }
        };

        info!(
            source = %self.source.describe(),
            tracks = tracks.len(),
            "playlist loaded"
        );
        self.set_playlist(tracks);
        self.playlist.len()
    }

    /// Replace the playlist wholesale. Playback stops; selection and
    /// pagination start over.
    pub fn set_playlist(&mut self, tracks: Vec<Track>) {
        if !self.backend.is_paused() {
            self.backend.pause();
        }
        // Events queued for the old playlist must not drive the new one.
        while self.backend.poll_event().is_some() {}

        self.playlist = tracks;
        self.playback = PlaybackState::default();
        self.pagination.reset();
    }

    /// Reveal one more page of the playlist.
    pub fn load_more_items(&mut self) {
        self.pagination.advance(self.playlist.len());
        debug!(
            displayed = self.pagination.displayed_count,
            total = self.playlist.len(),
            "load more"
        );
    }

    pub fn render(&self) -> PageView {
        let current = self.playback.current_index;
        let rows = self.playlist[..self.visible_count()]
            .iter()
            .enumerate()
            .map(|(index, track)| PageRow {
                index,
                name: track.name.clone(),
                time: track.formatted_time(&self.date_format),
                now_playing: current == Some(index),
            })
            .collect::<Vec<_>>();

        PageView {
            load_more_visible: rows.len() < self.playlist.len(),
            rows,
            button: self.play_button(),
        }
    }

    /// Select track `index` and ask the backend to play it.
    /// Out-of-range indices are ignored.
    pub fn play_track(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index) else {
            debug!(index, len = self.playlist.len(), "ignoring out-of-range track");
            return;
        };

        self.playback.current_index = Some(index);
        let url = self.source.resolve(&track.url);
        info!(index, name = %track.name, url = %url, "playing track");

        self.backend.set_source(&url);
        if let Err(err) = self.backend.play() {
            warn!(index, error = %err, "playback failed to start");
        }
    }

    pub fn toggle_play_pause(&mut self) {
        if !self.backend.is_paused() {
            self.backend.pause();
            return;
        }

        match self.playback.current_index {
            Some(_) => {
                if let Err(err) = self.backend.play() {
                    warn!(error = %err, "playback failed to resume");
                }
            }
            None if !self.playlist.is_empty() => self.play_track(0),
            None => debug!("nothing to play"),
        }
    }

    /// Play the track after the current one. Stops at the end of the list.
    pub fn play_next(&mut self) {
        let next = self.playback.current_index.map_or(0, |i| i + 1);
        if next < self.playlist.len() {
            self.play_track(next);
        } else {
            debug!("end of playlist");
        }
    }

    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Play => self.playback.is_playing = true,
            MediaEvent::Pause => self.playback.is_playing = false,
            MediaEvent::Ended => {
                self.playback.is_playing = false;
                self.play_next();
            }
            MediaEvent::Failed(err) => {
                warn!(
                    index = ?self.playback.current_index,
                    error = %err,
                    "playback failed to start"
                );
                self.playback.is_playing = false;
            }
        }
    }

    /// Drain pending backend events into [`Self::handle_media_event`].
    pub fn pump_media_events(&mut self) {
        while let Some(event) = self.backend.poll_event() {
            self.handle_media_event(event);
        }
    }

    pub fn play_button(&self) -> PlayButton {
        if self.playback.is_playing {
            PlayButton::Pause
        } else {
            PlayButton::Play
        }
    }

    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn displayed_count(&self) -> usize {
        self.pagination.displayed_count
    }

    /// Number of rows `render` produces.
    pub fn visible_count(&self) -> usize {
        self.pagination.visible(self.playlist.len())
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playback
            .current_index
            .and_then(|i| self.playlist.get(i))
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
