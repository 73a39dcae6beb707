//! Application model: the controller plus terminal-only cursor state.

use crate::controller::{MediaBackend, PlaylistController};

/// What the cursor is resting on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CursorTarget {
    /// A rendered playlist row, by absolute playlist index.
    Track(usize),
    /// The "load more" control below the last row.
    LoadMore,
}

/// The main application model.
pub struct App<B: MediaBackend> {
    pub controller: PlaylistController<B>,
    /// Position among the selectable lines: rendered rows, then "load more".
    pub cursor: usize,
}

impl<B: MediaBackend> App<B> {
    pub fn new(controller: PlaylistController<B>) -> Self {
        Self {
            controller,
            cursor: 0,
        }
    }

    /// Number of selectable lines currently on screen.
    pub fn line_count(&self) -> usize {
        let rows = self.controller.visible_count();
        if rows < self.controller.playlist().len() {
            rows + 1
        } else {
            rows
        }
    }

    pub fn target(&self) -> Option<CursorTarget> {
        let rows = self.controller.visible_count();
        if self.cursor < rows {
            Some(CursorTarget::Track(self.cursor))
        } else if self.cursor < self.line_count() {
            Some(CursorTarget::LoadMore)
        } else {
            None
        }
    }

    /// Keep the cursor on an existing line after the list changed.
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.line_count().saturating_sub(1));
    }

    /// Move the cursor down one line. Wraps around to the first line.
    pub fn next(&mut self) {
        let lines = self.line_count();
        if lines > 0 {
            self.cursor = (self.cursor + 1) % lines;
        }
    }

    /// Move the cursor up one line. Wraps around to the last line.
    pub fn prev(&mut self) {
        let lines = self.line_count();
        if lines > 0 {
            self.cursor = (self.cursor + lines - 1) % lines;
        }
    }

    pub fn first(&mut self) {
        self.cursor = 0;
    }

    pub fn last(&mut self) {
        self.cursor = self.line_count().saturating_sub(1);
    }

    /// Reveal another page. The cursor stays put, which leaves it on the
    /// first newly revealed row when it was on "load more".
    pub fn load_more(&mut self) {
        self.controller.load_more_items();
        self.clamp_cursor();
    }

    /// Act on whatever the cursor points at: play a track or load more.
    pub fn activate(&mut self) {
        match self.target() {
            Some(CursorTarget::Track(index)) => self.controller.play_track(index),
            Some(CursorTarget::LoadMore) => self.load_more(),
            None => {}
        }
    }

    /// Move the cursor onto the now-playing row when it is visible.
    pub fn follow_now_playing(&mut self) {
        if let Some(i) = self.controller.playback().current_index {
            if i < self.controller.visible_count() {
                self.cursor = i;
            }
        }
    }
}
