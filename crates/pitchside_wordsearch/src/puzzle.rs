//! A single game of word search.
//!
//! `PuzzleInstance` owns the grid, the target words, the words found so
//! far, and the active gesture. A new game builds a new instance; nothing
//! is reset in place.

use super::error::PuzzleError;
use super::generator::Generator;
use super::grid::Grid;
use super::selection::{Gesture, SelectionState};
use super::types::{Cell, FoundWord, WordEntry};
use rand::Rng;
use tracing::{debug, info, instrument};

/// What ending a gesture achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// No gesture was in progress.
    NoSelection,
    /// The traced letters spell no target word in either direction.
    NoMatch {
        /// Letters traced, in selection order.
        candidate: String,
    },
    /// The traced letters spell a word that was already found.
    AlreadyFound(String),
    /// A new word was found; others remain.
    Found(FoundWord),
    /// The last remaining word was found. Reported exactly once per puzzle.
    Completed(FoundWord),
}

impl SelectionOutcome {
    /// The newly found word, if this gesture found one.
    pub fn found_word(&self) -> Option<&FoundWord> {
        match self {
            SelectionOutcome::Found(found) | SelectionOutcome::Completed(found) => Some(found),
            _ => None,
        }
    }

    /// Whether this outcome should trigger the completion celebration.
    pub fn is_completion(&self) -> bool {
        matches!(self, SelectionOutcome::Completed(_))
    }
}

/// One word-search game.
#[derive(Debug, Clone)]
pub struct PuzzleInstance {
    grid: Grid,
    words: Vec<WordEntry>,
    found: Vec<FoundWord>,
    selection: SelectionState,
    completed: bool,
}

impl PuzzleInstance {
    /// Wraps an existing grid. The caller vouches that every word is in it.
    ///
    /// A puzzle with no words is complete from the start.
    #[instrument(skip(grid, words), fields(grid_size = grid.size(), words = words.len()))]
    pub fn new(grid: Grid, words: Vec<WordEntry>) -> Self {
        let completed = words.is_empty();
        Self {
            grid,
            words,
            found: Vec::new(),
            selection: SelectionState::Idle,
            completed,
        }
    }

    /// Generates a fresh grid for `words` and starts a game on it.
    ///
    /// # Errors
    ///
    /// Propagates any [`PuzzleError`] from the generator.
    #[instrument(skip(words, generator, rng), fields(words = words.len()))]
    pub fn generate<R: Rng + ?Sized>(
        words: Vec<WordEntry>,
        generator: &Generator,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let grid = generator.generate(&words, rng)?;
        Ok(Self::new(grid, words))
    }

    /// Begins a gesture on `cell`.
    ///
    /// Ignored once the puzzle is complete or when `cell` is off the grid.
    #[instrument(skip(self))]
    pub fn start_selection(&mut self, cell: Cell) {
        if self.completed || !self.grid.contains(cell) {
            return;
        }
        self.selection.begin(cell);
    }

    /// Offers `cell` to the active gesture. Returns true if it was appended.
    #[instrument(skip(self))]
    pub fn drag_selection(&mut self, cell: Cell) -> bool {
        if !self.grid.contains(cell) {
            return false;
        }
        self.selection.drag(cell)
    }

    /// Ends the active gesture and checks it against the target words.
    ///
    /// The traced letters match a word if they spell its canonical form
    /// forwards or backwards. A match records a [`FoundWord`] whose color
    /// index is the number of words found before it. The selection is
    /// cleared whatever the result.
    #[instrument(skip(self))]
    pub fn end_selection(&mut self) -> SelectionOutcome {
        let Some(gesture) = self.selection.finish() else {
            return SelectionOutcome::NoSelection;
        };
        self.check_gesture(gesture)
    }

    fn check_gesture(&mut self, gesture: Gesture) -> SelectionOutcome {
        let Some(forward) = self.grid.read(gesture.cells()) else {
            return SelectionOutcome::NoSelection;
        };
        let reversed: String = forward.chars().rev().collect();
        let spells = |entry: &WordEntry| *entry.canonical() == forward || *entry.canonical() == reversed;

        let unfound = self
            .words
            .iter()
            .find(|&entry| spells(entry) && !self.is_found(entry.canonical()));

        let Some(entry) = unfound else {
            if let Some(entry) = self.words.iter().find(|&entry| spells(entry)) {
                debug!(word = %entry.canonical(), "Word already found");
                return SelectionOutcome::AlreadyFound(entry.canonical().clone());
            }
            debug!(candidate = %forward, "No match");
            return SelectionOutcome::NoMatch { candidate: forward };
        };

        let found = FoundWord::new(entry.canonical().clone(), gesture.cells().clone(), self.found.len());
        info!(word = %found.word(), color = found.color(), "Word found");
        self.found.push(found.clone());

        if self.found.len() == self.words.len() {
            self.completed = true;
            info!(words = self.words.len(), "Puzzle completed");
            SelectionOutcome::Completed(found)
        } else {
            SelectionOutcome::Found(found)
        }
    }

    /// Whether `cell` is part of the gesture in progress.
    pub fn is_selected(&self, cell: Cell) -> bool {
        self.selection.contains(cell)
    }

    /// The earliest found word covering `cell`, for coloring.
    pub fn found_cell(&self, cell: Cell) -> Option<&FoundWord> {
        self.found.iter().find(|found| found.covers(cell))
    }

    /// Palette color (`#RRGGBB`) for a found word.
    pub fn color_for(&self, found: &FoundWord) -> &'static str {
        found.color()
    }

    /// Whether every word has been found.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the word with this canonical form has been found.
    pub fn is_found(&self, canonical: &str) -> bool {
        self.found.iter().any(|found| found.word() == canonical)
    }

    /// The letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Target words, in checklist order.
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Found words, in discovery order.
    pub fn found_words(&self) -> &[FoundWord] {
        &self.found
    }

    /// Target words not yet found.
    pub fn remaining(&self) -> impl Iterator<Item = &WordEntry> {
        self.words.iter().filter(|entry| !self.is_found(entry.canonical()))
    }

    /// Current selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }
}
