//! Terminal UI for the club word search.

mod app;
mod input;
mod ui;

pub use app::{CELEBRATION_FRAMES, Celebration, Spark, WordSearchApp};
pub use input::{CELL_WIDTH, cell_at, move_cursor};
pub use ui::{Screen, hex_color, screen};

use crate::config::PitchsideConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Log file written while the TUI owns the terminal.
pub const TUI_LOG_FILE: &str = "pitchside_tui.log";

/// How long to wait for input before redrawing.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the word search until the user quits.
///
/// `names` are the club names puzzles are drawn from. A `seed` makes the
/// sequence of puzzles reproducible.
pub fn run_wordsearch(names: Vec<String>, config: PitchsideConfig, seed: Option<u64>) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(TUI_LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,pitchside=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(names = names.len(), ?seed, "Starting Pitchside word search");

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut app = WordSearchApp::new(names, config, rng)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Word search loop error");
    }
    res
}

#[instrument(skip_all)]
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut WordSearchApp,
) -> Result<()> {
    loop {
        let area = terminal.draw(|f| ui::draw(f, app))?.area;
        let board = screen(area, app.puzzle().grid().size()).board;

        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(mouse) => app.handle_mouse(mouse, board),
                _ => {}
            }
        }

        if app.should_quit() {
            info!("Leaving word search");
            return Ok(());
        }
        app.tick();
    }
}
