//! State types owned by the controller and the view it renders.

/// Which track is selected and whether the backend reports it as playing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Index into the sorted playlist; `None` until something is played.
    pub current_index: Option<usize>,
    /// Mirrors the backend's play/pause events.
    pub is_playing: bool,
}

/// How much of the playlist has been revealed so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PaginationState {
    pub displayed_count: usize,
    pub page_size: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            displayed_count: 0,
            page_size: page_size.max(1),
        }
    }

    /// Reveal one more page, never past `len`.
    pub fn advance(&mut self, len: usize) {
        self.displayed_count = self.displayed_count.saturating_add(self.page_size).min(len);
    }

    /// Number of rows to show: `displayed_count` rounded up to a whole page, capped at `len`.
    pub fn visible(&self, len: usize) -> usize {
        self.displayed_count
            .div_ceil(self.page_size)
            .saturating_mul(self.page_size)
            .min(len)
    }

    pub fn reset(&mut self) {
        self.displayed_count = 0;
    }
}

/// Label of the play/pause control.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayButton {
    Play,
    Pause,
}

impl PlayButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRow {
    /// Absolute playlist index; what `play_track` expects.
    pub index: usize,
    pub name: String,
    pub time: String,
    pub now_playing: bool,
}

/// Everything needed to draw the playlist page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub rows: Vec<PageRow>,
    pub load_more_visible: bool,
    pub button: PlayButton,
}
