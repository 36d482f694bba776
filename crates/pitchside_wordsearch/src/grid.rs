//! The finished letter grid.

use super::error::PuzzleError;
use super::types::{Cell, Direction};
use serde::Serialize;
use tracing::instrument;

/// Square grid of uppercase letters.
///
/// Every cell holds a letter; grids are only produced complete, either by
/// the generator or from literal rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    /// Letters in row-major order.
    letters: Vec<char>,
}

impl Grid {
    pub(crate) fn from_letters(size: usize, letters: Vec<char>) -> Self {
        debug_assert_eq!(letters.len(), size * size);
        Self { size, letters }
    }

    /// Builds a grid from literal rows, e.g. `["CATXY", ...]`.
    ///
    /// # Errors
    ///
    /// Rejects empty input, non-square input, and characters outside `A`-`Z`.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, PuzzleError> {
        let size = rows.len();
        if size == 0 {
            return Err(PuzzleError::InvalidGridSize);
        }

        let mut letters = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.as_ref().chars().collect();
            if chars.len() != size {
                return Err(PuzzleError::RaggedGrid {
                    row,
                    len: chars.len(),
                    expected: size,
                });
            }
            for (col, letter) in chars.into_iter().enumerate() {
                if !letter.is_ascii_uppercase() {
                    return Err(PuzzleError::InvalidLetter { row, col, letter });
                }
                letters.push(letter);
            }
        }

        Ok(Self { size, letters })
    }

    /// Width and height of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `cell` lies on the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Letter at `cell`, or `None` off the grid.
    pub fn get(&self, cell: Cell) -> Option<char> {
        if !self.contains(cell) {
            return None;
        }
        self.letters.get(cell.row * self.size + cell.col).copied()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(self.size)
    }

    /// Concatenates the letters under `cells`, in order.
    ///
    /// Returns `None` if any cell is off the grid.
    pub fn read(&self, cells: &[Cell]) -> Option<String> {
        cells.iter().map(|cell| self.get(*cell)).collect()
    }

    /// Locates `word` as a straight run in any of the eight directions.
    ///
    /// Returns the cells from the word's first letter to its last. Because
    /// all eight directions are searched, a word written backwards is found
    /// starting from its far end.
    #[instrument(skip(self))]
    pub fn find(&self, word: &str) -> Option<Vec<Cell>> {
        let letters: Vec<char> = word.chars().collect();
        let first = *letters.first()?;

        for row in 0..self.size {
            for col in 0..self.size {
                let start = Cell::new(row, col);
                if self.get(start) != Some(first) {
                    continue;
                }
                for direction in Direction::ALL {
                    if let Some(cells) = self.run_matching(start, direction, &letters) {
                        return Some(cells);
                    }
                }
            }
        }
        None
    }

    fn run_matching(&self, start: Cell, direction: Direction, letters: &[char]) -> Option<Vec<Cell>> {
        letters
            .iter()
            .enumerate()
            .map(|(i, letter)| {
                start
                    .advance_within(direction, i, self.size)
                    .filter(|cell| self.get(*cell) == Some(*letter))
            })
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
