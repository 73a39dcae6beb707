use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::config;
use crate::controller::MediaBackend;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Now-playing index seen on the previous iteration; the cursor follows
    /// changes to it (auto-advance).
    pub last_playing_index: Option<usize>,
}

impl EventLoopState {
    /// Construct a new `EventLoopState` seeded from `app`.
    pub fn new<B: MediaBackend>(app: &App<B>) -> Self {
        Self {
            pending_gg: false,
            last_playing_index: app.controller.playback().current_index,
        }
    }
}

/// Main terminal event loop: mirrors media events into the controller,
/// draws, and dispatches key presses. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.controller.pump_media_events();

        let playing_index = app.controller.playback().current_index;
        if playing_index != state.last_playing_index {
            app.follow_now_playing();
            state.last_playing_index = playing_index;
        }
        app.clamp_cursor();

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, state) {
                    app.controller
                        .backend()
                        .quit_softly(settings.audio.quit_fade_out_ms);
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply a key press to `app`. Returns `true` when the user asked to quit.
fn handle_key_event<B: MediaBackend>(
    key: KeyEvent,
    app: &mut App<B>,
    state: &mut EventLoopState,
) -> bool {
    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => app.last(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Enter => app.activate(),
        KeyCode::Char('p') | KeyCode::Char(' ') => app.controller.toggle_play_pause(),
        KeyCode::Char('l') => app.controller.play_next(),
        KeyCode::Char('m') => app.load_more(),
        _ => {}
    }

    false
}
