//! Drag-selection state machine.
//!
//! A gesture starts on one cell, locks onto a direction when it reaches a
//! neighbouring cell on one of the eight lines, and then only grows by the
//! next cell along that ray. Touches anywhere else are ignored so that
//! imprecise pointer movement never aborts the gesture.

use super::types::{Cell, Direction};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// An in-progress gesture.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Gesture {
    /// Traced cells, first touch first. Never empty.
    cells: Vec<Cell>,
    /// Locked once a second cell has been accepted.
    direction: Option<Direction>,
}

impl Gesture {
    /// Starts a gesture on `first`.
    pub fn new(first: Cell) -> Self {
        Self {
            cells: vec![first],
            direction: None,
        }
    }

    /// The cell the gesture started on.
    pub fn first(&self) -> Cell {
        self.cells[0]
    }

    /// The most recently accepted cell.
    pub fn last(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells traced so far.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a gesture holds at least its first cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` is part of this gesture.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Offers `cell` to the gesture. Returns true if it was appended.
    ///
    /// Without a locked direction, only an immediate neighbour of the first
    /// cell on a horizontal, vertical or 45° line is accepted, and it locks
    /// the direction. With a locked direction, only the next cell on the ray
    /// (`first + direction * len`) is accepted.
    #[instrument(skip(self), fields(len = self.cells.len(), direction = ?self.direction))]
    pub fn extend(&mut self, cell: Cell) -> bool {
        if cell == self.last() {
            return false;
        }

        let first = self.first();
        let Some(direction) = self.direction.or_else(|| Direction::between(first, cell)) else {
            return false;
        };

        if first.advance(direction, self.cells.len()) != Some(cell) {
            return false;
        }

        if self.direction.is_none() {
            debug!(%direction, "Gesture direction locked");
            self.direction = Some(direction);
        }
        self.cells.push(cell);
        true
    }
}

/// Whether a gesture is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No gesture.
    #[default]
    Idle,
    /// A gesture is being traced.
    Selecting(Gesture),
}

impl SelectionState {
    /// Begins a gesture on `cell`, discarding any previous one.
    pub fn begin(&mut self, cell: Cell) {
        *self = SelectionState::Selecting(Gesture::new(cell));
    }

    /// Offers `cell` to the active gesture. Ignored while idle.
    pub fn drag(&mut self, cell: Cell) -> bool {
        match self {
            SelectionState::Idle => false,
            SelectionState::Selecting(gesture) => gesture.extend(cell),
        }
    }

    /// Ends the gesture, returning it and going back to idle.
    pub fn finish(&mut self) -> Option<Gesture> {
        match std::mem::take(self) {
            SelectionState::Idle => None,
            SelectionState::Selecting(gesture) => Some(gesture),
        }
    }

    /// The active gesture, if any.
    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Selecting(gesture) => Some(gesture),
        }
    }

    /// Whether `cell` is part of the active gesture.
    pub fn contains(&self, cell: Cell) -> bool {
        self.gesture().is_some_and(|gesture| gesture.contains(cell))
    }

    /// True while idle.
    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }
}
