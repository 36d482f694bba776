//! Core domain types for the word-search puzzle.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display colors assigned to found words, in discovery order.
pub const PALETTE: [&str; 10] = [
    "#2E7D32", // green
    "#E64A19", // orange
    "#1565C0", // blue
    "#C2185B", // pink
    "#6A1B9A", // purple
    "#F9A825", // amber
    "#00838F", // cyan
    "#C62828", // red
    "#558B2F", // olive green
    "#4527A0", // deep purple
];

/// A cell on the grid, addressed by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Row index (top is 0).
    pub row: usize,
    /// Column index (left is 0).
    pub col: usize,
}

impl Cell {
    /// Creates a cell at `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the cell `steps` cells away along `direction`.
    ///
    /// Returns `None` when the result would have a negative coordinate.
    /// Upper bounds are the grid's concern.
    pub fn advance(self, direction: Direction, steps: usize) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        let steps = steps as isize;
        let row = self.row as isize + dr * steps;
        let col = self.col as isize + dc * steps;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Cell::new(row as usize, col as usize))
    }

    /// Like [`Cell::advance`], but also rejects cells outside a `size`×`size` grid.
    pub fn advance_within(self, direction: Direction, steps: usize, size: usize) -> Option<Cell> {
        self.advance(direction, steps)
            .filter(|cell| cell.row < size && cell.col < size)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight straight-line directions through the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
    /// Up and to the left.
    UpLeft,
    /// Up and to the right.
    UpRight,
    /// Down and to the left.
    DownLeft,
    /// Down and to the right.
    DownRight,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Row and column step for one cell of travel.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Maps a unit step back to its direction. `(0, 0)` and non-unit steps have none.
    pub fn from_delta(dr: isize, dc: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == (dr, dc))
    }

    /// The direction of travel from `from` to `to`, if they lie on a common line.
    ///
    /// Lines are pure horizontals, pure verticals, and exact 45° diagonals
    /// (`|Δrow| == |Δcol| != 0`). Anything else, including `from == to`, has
    /// no direction.
    #[instrument]
    pub fn between(from: Cell, to: Cell) -> Option<Self> {
        let dr = to.row as isize - from.row as isize;
        let dc = to.col as isize - from.col as isize;
        let on_line = (dr == 0) != (dc == 0) || (dr != 0 && dr.abs() == dc.abs());
        if !on_line {
            return None;
        }
        Self::from_delta(dr.signum(), dc.signum())
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        let (dr, dc) = self.delta();
        // Every direction's negation is also a direction.
        Self::from_delta(-dr, -dc).unwrap_or(self)
    }
}

/// A target word: the normalized search key plus its checklist label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct WordEntry {
    /// Uppercase ASCII letters only; used for placement and matching.
    canonical: String,
    /// Human-readable label shown in the word list.
    display: String,
}

impl WordEntry {
    /// Builds an entry from a raw name such as `"Paris Saint-Germain"`.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Self {
            canonical: normalize(name),
            display: name.trim().to_uppercase(),
        }
    }

    /// Builds an entry with an explicit label, normalizing `canonical` anyway.
    pub fn with_display(canonical: impl AsRef<str>, display: impl Into<String>) -> Self {
        Self {
            canonical: normalize(canonical.as_ref()),
            display: display.into(),
        }
    }

    /// Number of letters in the canonical form.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// True when normalization left no letters.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

/// Normalizes a name to its canonical search key.
///
/// Uppercases, folds common accented Latin letters to their base letter, and
/// drops everything that is not `A`-`Z`.
///
/// ```
/// use pitchside_wordsearch::normalize;
///
/// assert_eq!(normalize("Atlético Madrid"), "ATLETICOMADRID");
/// assert_eq!(normalize("St. Pauli"), "STPAULI");
/// ```
pub fn normalize(name: &str) -> String {
    name.chars()
        .flat_map(char::to_uppercase)
        .map(fold_accent)
        .filter(char::is_ascii_uppercase)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'Ç' => 'C',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ñ' => 'N',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        other => other,
    }
}

/// A word the player has found, with the cells they traced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct FoundWord {
    /// Canonical form of the word.
    word: String,
    /// Cells in the order they were selected.
    cells: Vec<Cell>,
    /// Index into [`PALETTE`], assigned in discovery order.
    color_index: usize,
}

impl FoundWord {
    pub(crate) fn new(word: String, cells: Vec<Cell>, color_index: usize) -> Self {
        Self {
            word,
            cells,
            color_index,
        }
    }

    /// Palette color for this word. Wraps if there are more words than colors.
    pub fn color(&self) -> &'static str {
        PALETTE[self.color_index % PALETTE.len()]
    }

    /// Whether this word covers `cell`.
    pub fn covers(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}
