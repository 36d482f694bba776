//! Errors raised while building a puzzle.

use derive_more::{Display, Error};

/// Error that can occur when generating or loading a grid.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PuzzleError {
    /// A grid must have at least one row and column.
    #[display("Grid size must be at least 1")]
    InvalidGridSize,

    /// The word cannot fit on a grid of this size in any direction.
    #[display("Word {word} has {len} letters but the grid is only {grid_size} wide")]
    WordTooLong {
        /// Canonical form of the word.
        word: String,
        /// Number of letters.
        len: usize,
        /// Grid dimension.
        grid_size: usize,
    },

    /// Normalization removed every character of the word.
    #[display("Word {display:?} has no letters to place")]
    EmptyWord {
        /// Label of the offending entry.
        display: String,
    },

    /// Random placement ran out of attempts for this word.
    #[display("Could not place {word} after {attempts} attempts")]
    GenerationFailed {
        /// Canonical form of the word.
        word: String,
        /// Attempts made before giving up.
        attempts: usize,
    },

    /// A row of a literal grid had the wrong length.
    #[display("Grid row {row} has {len} cells, expected {expected}")]
    RaggedGrid {
        /// Offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Length required for a square grid.
        expected: usize,
    },

    /// A literal grid contained something other than `A`-`Z`.
    #[display("Grid cell ({row}, {col}) holds {letter:?}, expected A-Z")]
    InvalidLetter {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// The rejected character.
        letter: char,
    },
}
