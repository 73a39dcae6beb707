use super::*;
use crate::config::PlaylistSettings;
use crate::controller::{MediaBackend, MediaEvent, PlaybackError, PlaylistController};
use crate::playlist::{ManifestError, ManifestSource, Track, parse_timestamp};

#[derive(Default)]
struct SilentBackend {
    sources: Vec<String>,
}

impl MediaBackend for SilentBackend {
    fn set_source(&mut self, url: &str) {
        self.sources.push(url.to_string());
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn is_paused(&self) -> bool {
        true
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        None
    }
}

struct NoManifest;

impl ManifestSource for NoManifest {
    fn fetch(&self) -> Result<String, ManifestError> {
        Ok(String::new())
    }

    fn describe(&self) -> String {
        "none".into()
    }
}

fn t(name: &str) -> Track {
    Track {
        name: name.into(),
        url: format!("{name}.mp3"),
        timestamp: parse_timestamp("2024-01-01").unwrap(),
    }
}

fn app_with(n: usize) -> App<SilentBackend> {
    let mut controller = PlaylistController::new(
        SilentBackend::default(),
        Box::new(NoManifest),
        &PlaylistSettings::default(),
    );
    controller.set_playlist((0..n).map(|i| t(&format!("t{i}"))).collect());
    controller.load_more_items();
    App::new(controller)
}

#[test]
fn load_more_line_is_selectable_only_while_rows_are_hidden() {
    let app = app_with(7);
    assert_eq!(app.line_count(), 6);

    let app = app_with(3);
    assert_eq!(app.line_count(), 3);
}

#[test]
fn next_prev_wrap_around_lines() {
    let mut app = app_with(3);

    app.prev();
    assert_eq!(app.cursor, 2);
    app.next();
    assert_eq!(app.cursor, 0);
    app.next();
    assert_eq!(app.target(), Some(CursorTarget::Track(1)));
}

#[test]
fn activate_on_row_plays_that_track() {
    let mut app = app_with(7);
    app.next();
    app.next();

    app.activate();

    assert_eq!(app.controller.playback().current_index, Some(2));
    assert_eq!(app.controller.backend().sources, vec!["t2.mp3".to_string()]);
}

#[test]
fn activate_on_load_more_reveals_next_page_and_keeps_cursor() {
    let mut app = app_with(7);
    app.last();
    assert_eq!(app.target(), Some(CursorTarget::LoadMore));

    app.activate();

    assert_eq!(app.controller.visible_count(), 7);
    assert_eq!(app.line_count(), 7);
    assert_eq!(app.target(), Some(CursorTarget::Track(5)));
}

#[test]
fn empty_playlist_has_no_target() {
    let mut app = app_with(0);

    app.next();
    app.activate();

    assert_eq!(app.line_count(), 0);
    assert_eq!(app.target(), None);
    assert!(app.controller.backend().sources.is_empty());
}

#[test]
fn follow_now_playing_only_moves_to_visible_rows() {
    let mut app = app_with(7);

    app.controller.play_track(3);
    app.follow_now_playing();
    assert_eq!(app.cursor, 3);

    app.controller.play_track(6);
    app.follow_now_playing();
    assert_eq!(app.cursor, 3);
}
