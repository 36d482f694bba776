//! Word-search application state and input handling.

use super::input::{cell_at, move_cursor};
use crate::config::PitchsideConfig;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use pitchside_wordsearch::{Cell, Direction, PuzzleError, PuzzleInstance, SelectionOutcome, sample_words};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

/// Frames the completion confetti stays on screen.
pub const CELEBRATION_FRAMES: u16 = 30;

/// Confetti pieces per celebration.
const SPARK_COUNT: usize = 400;

/// One piece of confetti, positioned as a fraction of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    /// Horizontal position in `0.0..1.0`.
    pub x: f32,
    /// Vertical position in `0.0..1.0`.
    pub y: f32,
    /// Index into the puzzle palette.
    pub color: usize,
}

/// Short-lived confetti shown when a puzzle is completed.
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    frames_left: u16,
    sparks: Vec<Spark>,
}

impl Celebration {
    fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let sparks = (0..SPARK_COUNT)
            .map(|_| Spark {
                x: rng.gen_range(0.0..1.0),
                // Spread around 60% down the screen, like a burst from below.
                y: (0.6 + rng.gen_range(-0.5..0.4f32)).clamp(0.0, 0.99),
                color: rng.gen_range(0..pitchside_wordsearch::PALETTE.len()),
            })
            .collect();
        Self {
            frames_left: CELEBRATION_FRAMES,
            sparks,
        }
    }

    /// Confetti pieces to draw.
    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    /// Frames remaining before the confetti disappears.
    pub fn frames_left(&self) -> u16 {
        self.frames_left
    }
}

/// State of the word-search screen.
pub struct WordSearchApp {
    puzzle: PuzzleInstance,
    names: Vec<String>,
    config: PitchsideConfig,
    rng: StdRng,
    cursor: Cell,
    status_message: String,
    celebration: Option<Celebration>,
    should_quit: bool,
}

impl WordSearchApp {
    /// Creates the app and generates the first puzzle from `names`.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] if the first puzzle cannot be generated.
    #[instrument(skip(names, config, rng), fields(names = names.len()))]
    pub fn new(names: Vec<String>, config: PitchsideConfig, mut rng: StdRng) -> Result<Self, PuzzleError> {
        let puzzle = build_puzzle(&names, &config, &mut rng)?;
        Ok(Self {
            puzzle,
            names,
            config,
            rng,
            cursor: Cell::new(0, 0),
            status_message: "Drag across a club name, or mark both ends with space.".to_string(),
            celebration: None,
            should_quit: false,
        })
    }

    /// The current puzzle.
    pub fn puzzle(&self) -> &PuzzleInstance {
        &self.puzzle
    }

    /// Keyboard cursor position.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Message for the status bar.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Active confetti, if any.
    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Replaces the puzzle with a freshly generated one.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        match build_puzzle(&self.names, &self.config, &mut self.rng) {
            Ok(puzzle) => {
                info!("New puzzle started");
                self.puzzle = puzzle;
                self.cursor = Cell::new(0, 0);
                self.celebration = None;
                self.status_message = "New puzzle. Find every club!".to_string();
            }
            Err(e) => {
                self.status_message = format!("Could not build a puzzle: {}", e);
            }
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.puzzle.selection().is_idle() {
                    self.puzzle.start_selection(self.cursor);
                } else {
                    self.trace_to_cursor();
                    let outcome = self.puzzle.end_selection();
                    self.apply_outcome(outcome);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key, self.puzzle.grid().size());
            }
            _ => {}
        }
    }

    /// Handles a mouse event. `board` is where the letters are drawn.
    #[instrument(skip(self, event), fields(kind = ?event.kind, column = event.column, row = event.row))]
    pub fn handle_mouse(&mut self, event: MouseEvent, board: Rect) {
        let cell = cell_at(board, self.puzzle.grid().size(), event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(cell) = cell {
                    self.cursor = cell;
                    self.puzzle.start_selection(cell);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(cell) = cell {
                    if self.puzzle.drag_selection(cell) {
                        self.cursor = cell;
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let outcome = self.puzzle.end_selection();
                self.apply_outcome(outcome);
            }
            _ => {}
        }
    }

    /// Advances animations by one frame.
    pub fn tick(&mut self) {
        if let Some(celebration) = &mut self.celebration {
            celebration.frames_left = celebration.frames_left.saturating_sub(1);
            if celebration.frames_left == 0 {
                self.celebration = None;
            }
        }
    }

    /// Drags a keyboard gesture from its anchor to the cursor, one cell at a
    /// time. Nothing is added when the cursor is not on a line from the anchor.
    fn trace_to_cursor(&mut self) {
        let Some(anchor) = self.puzzle.selection().gesture().map(|g| g.first()) else {
            return;
        };
        let Some(direction) = Direction::between(anchor, self.cursor) else {
            return;
        };
        let mut cell = anchor;
        while cell != self.cursor {
            match cell.advance(direction, 1) {
                Some(next) if self.puzzle.drag_selection(next) => cell = next,
                _ => break,
            }
        }
    }

    fn apply_outcome(&mut self, outcome: SelectionOutcome) {
        debug!(?outcome, "Gesture finished");
        self.status_message = match &outcome {
            SelectionOutcome::NoSelection => return,
            SelectionOutcome::NoMatch { candidate } => format!("{} is not on the list.", candidate),
            SelectionOutcome::AlreadyFound(word) => format!("{} is already found.", self.label(word)),
            SelectionOutcome::Found(found) => format!(
                "Found {}! {} to go.",
                self.label(found.word()),
                self.puzzle.remaining().count()
            ),
            SelectionOutcome::Completed(found) => format!(
                "Found {}! All {} clubs found. Press 'n' for a new puzzle.",
                self.label(found.word()),
                self.puzzle.words().len()
            ),
        };
        if outcome.is_completion() {
            self.celebration = Some(Celebration::new(&mut self.rng));
        }
    }

    fn label(&self, canonical: &str) -> String {
        self.puzzle
            .words()
            .iter()
            .find(|entry| entry.canonical() == canonical)
            .map(|entry| entry.display().clone())
            .unwrap_or_else(|| canonical.to_string())
    }
}

/// Samples words from `names` and generates a puzzle for them.
fn build_puzzle(
    names: &[String],
    config: &PitchsideConfig,
    rng: &mut StdRng,
) -> Result<PuzzleInstance, PuzzleError> {
    let words = sample_words(names, *config.max_word_len(), *config.word_count(), rng);
    PuzzleInstance::generate(words, &config.generator(), rng)
}
