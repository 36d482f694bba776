//! Random placement of words into a grid.
//!
//! Each word is dropped at a random start cell, direction, and orientation
//! until it fits. A placement fits when every letter lands on the grid and
//! each target cell is either empty or already holds the same letter, so
//! words may cross. Leftover cells get random filler letters.

use super::error::PuzzleError;
use super::grid::Grid;
use super::types::{Cell, Direction, WordEntry};
use derive_getters::Getters;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Default number of placement attempts per word before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Letters used to fill cells no word covers.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Where one word went. Only needed while generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    start: Cell,
    direction: Direction,
    reversed: bool,
}

/// Puzzle generator with a bounded retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Generator {
    /// Width and height of generated grids.
    grid_size: usize,
    /// Attempts per word before reporting [`PuzzleError::GenerationFailed`].
    max_attempts: usize,
}

impl Generator {
    /// Creates a generator for `grid_size`×`grid_size` grids.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the per-word attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Places every word and fills the rest of the grid.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::InvalidGridSize`] for a zero-sized grid.
    /// - [`PuzzleError::EmptyWord`] / [`PuzzleError::WordTooLong`] for words
    ///   that can never be placed.
    /// - [`PuzzleError::GenerationFailed`] when a word finds no free run within
    ///   the attempt budget (typically a crowded grid).
    #[instrument(skip(self, words, rng), fields(grid_size = self.grid_size, words = words.len()))]
    pub fn generate<R: Rng + ?Sized>(
        &self,
        words: &[WordEntry],
        rng: &mut R,
    ) -> Result<Grid, PuzzleError> {
        let size = self.grid_size;
        if size == 0 {
            return Err(PuzzleError::InvalidGridSize);
        }
        for word in words {
            self.check_placeable(word)?;
        }

        let mut cells: Vec<Option<char>> = vec![None; size * size];
        for word in words {
            let placement = self.place(&mut cells, word, rng)?;
            debug!(word = %word.canonical(), ?placement, "Placed word");
        }

        let letters = cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();

        info!("Puzzle grid generated");
        Ok(Grid::from_letters(size, letters))
    }

    fn check_placeable(&self, word: &WordEntry) -> Result<(), PuzzleError> {
        if word.is_empty() {
            return Err(PuzzleError::EmptyWord {
                display: word.display().clone(),
            });
        }
        if word.len() > self.grid_size {
            return Err(PuzzleError::WordTooLong {
                word: word.canonical().clone(),
                len: word.len(),
                grid_size: self.grid_size,
            });
        }
        Ok(())
    }

    fn place<R: Rng + ?Sized>(
        &self,
        cells: &mut [Option<char>],
        word: &WordEntry,
        rng: &mut R,
    ) -> Result<Placement, PuzzleError> {
        let size = self.grid_size;
        let forward: Vec<char> = word.canonical().chars().collect();

        for _ in 0..self.max_attempts {
            let placement = Placement {
                direction: Direction::ALL[rng.gen_range(0..Direction::ALL.len())],
                reversed: rng.gen_bool(0.5),
                start: Cell::new(rng.gen_range(0..size), rng.gen_range(0..size)),
            };
            let letters: Vec<char> = if placement.reversed {
                forward.iter().rev().copied().collect()
            } else {
                forward.clone()
            };

            if let Some(targets) = self.fit(cells, placement, &letters) {
                for (index, letter) in targets.into_iter().zip(letters) {
                    cells[index] = Some(letter);
                }
                return Ok(placement);
            }
        }

        warn!(word = %word.canonical(), attempts = self.max_attempts, "Word could not be placed");
        Err(PuzzleError::GenerationFailed {
            word: word.canonical().clone(),
            attempts: self.max_attempts,
        })
    }

    /// Returns the row-major indices the letters would occupy, if they fit.
    fn fit(&self, cells: &[Option<char>], placement: Placement, letters: &[char]) -> Option<Vec<usize>> {
        let size = self.grid_size;
        letters
            .iter()
            .enumerate()
            .map(|(i, letter)| {
                let cell = placement.start.advance_within(placement.direction, i, size)?;
                let index = cell.row * size + cell.col;
                match cells[index] {
                    None => Some(index),
                    Some(existing) if existing == *letter => Some(index),
                    Some(_) => None,
                }
            })
            .collect()
    }
}

/// Generates a `grid_size` grid with the default attempt budget.
pub fn generate<R: Rng + ?Sized>(
    words: &[WordEntry],
    grid_size: usize,
    rng: &mut R,
) -> Result<Grid, PuzzleError> {
    Generator::new(grid_size).generate(words, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_fit_allows_matching_crossings() {
        let generator = Generator::new(3);
        let mut cells = vec![None; 9];
        cells[4] = Some('A');
        let placement = Placement {
            start: Cell::new(1, 0),
            direction: Direction::Right,
            reversed: false,
        };
        assert_eq!(generator.fit(&cells, placement, &['C', 'A', 'T']), Some(vec![3, 4, 5]));
        assert_eq!(generator.fit(&cells, placement, &['D', 'O', 'G']), None);
    }

    #[test]
    fn test_fit_rejects_out_of_bounds() {
        let generator = Generator::new(3);
        let cells = vec![None; 9];
        let placement = Placement {
            start: Cell::new(0, 1),
            direction: Direction::DownRight,
            reversed: false,
        };
        assert_eq!(generator.fit(&cells, placement, &['C', 'A', 'T']), None);
    }

    #[test]
    fn test_zero_attempts_fails_fast() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = Generator::new(5)
            .with_max_attempts(0)
            .generate(&[WordEntry::new("Ajax")], &mut rng);
        assert_eq!(
            result,
            Err(PuzzleError::GenerationFailed {
                word: "AJAX".to_string(),
                attempts: 0
            })
        );
    }
}
