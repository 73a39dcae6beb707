use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::controller::PlaylistController;
use crate::logging;
use crate::playlist::ManifestLocation;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    let _log_guard = logging::init(&settings.log)?;

    let manifest = env::args()
        .nth(1)
        .unwrap_or_else(|| settings.manifest.source.clone());
    let location = ManifestLocation::parse(&manifest, &settings.manifest)
        .inspect_err(|err| error!(error = %err, "bad manifest location"))?;
    info!(manifest = %manifest, "starting");

    let audio_player = AudioPlayer::new(settings.audio.clone());
    let mut controller =
        PlaylistController::new(audio_player, Box::new(location), &settings.playlist);
    controller.init();
    let mut app = App::new(controller);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(&app);
        event_loop::run(&mut terminal, &settings, &mut app, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("shutting down");
    run_result
}
