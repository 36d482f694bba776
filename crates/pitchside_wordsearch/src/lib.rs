//! Word-search puzzles built from football club names.
//!
//! # Architecture
//!
//! - **Generator**: places words at random along the eight line directions
//!   (optionally reversed), with a bounded number of attempts per word.
//! - **Selection**: a small state machine for drag gestures that locks onto
//!   a direction and only grows along that ray.
//! - **Puzzle**: owns one game, matches finished gestures against the
//!   target words, and tracks completion.
//!
//! Randomness is always passed in, so seeded generators give repeatable
//! puzzles.
//!
//! # Example
//!
//! ```
//! use pitchside_wordsearch::{Cell, Grid, PuzzleInstance, SelectionOutcome, WordEntry};
//!
//! let grid = Grid::from_rows(&["XXXXX", "XXXXX", "CATXX", "XXXXX", "XXXXX"])?;
//! let mut puzzle = PuzzleInstance::new(grid, vec![WordEntry::new("Cat")]);
//!
//! puzzle.start_selection(Cell::new(2, 2));
//! puzzle.drag_selection(Cell::new(2, 1));
//! puzzle.drag_selection(Cell::new(2, 0));
//! assert!(matches!(puzzle.end_selection(), SelectionOutcome::Completed(_)));
//! assert!(puzzle.is_completed());
//! # Ok::<(), pitchside_wordsearch::PuzzleError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candidates;
mod error;
mod generator;
mod grid;
mod puzzle;
mod selection;
mod types;

pub use candidates::{DEFAULT_MAX_WORD_LEN, DEFAULT_WORD_COUNT, sample_words};
pub use error::PuzzleError;
pub use generator::{ALPHABET, DEFAULT_MAX_ATTEMPTS, Generator, generate};
pub use grid::Grid;
pub use puzzle::{PuzzleInstance, SelectionOutcome};
pub use selection::{Gesture, SelectionState};
pub use types::{Cell, Direction, FoundWord, PALETTE, WordEntry, normalize};
