//! Core domain types for tic-tac-toe.

use crate::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Symbol a player places in a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Mark {
    /// Player one's mark (moves first).
    X,
    /// Player two's mark.
    O,
}

impl Mark {
    /// Returns the character drawn for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Value held by a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellValue {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell carries a player's mark.
    Marked(Mark),
}

impl CellValue {
    /// Checks if the value is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns the mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            CellValue::Empty => None,
            CellValue::Marked(mark) => Some(mark),
        }
    }

    /// Returns the character drawn for this value (`.` when empty).
    pub fn symbol(self) -> char {
        self.mark().map_or('.', Mark::symbol)
    }
}

impl From<Mark> for CellValue {
    fn from(mark: Mark) -> Self {
        CellValue::Marked(mark)
    }
}

/// A single square of the board.
///
/// The cell does no validation of its own; [`crate::Board`] only calls
/// [`Cell::add_token`] on empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    value: CellValue,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self {
            value: CellValue::Empty,
        }
    }

    /// Returns the current value.
    pub fn value(&self) -> CellValue {
        self.value
    }

    /// Overwrites the value with `mark`.
    pub fn add_token(&mut self, mark: Mark) {
        self.value = CellValue::Marked(mark);
    }

    /// Checks if nobody has played here.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// A position on the board, guaranteed to lie inside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinates {
    row: usize,
    column: usize,
}

impl Coordinates {
    /// Creates coordinates, rejecting anything outside `[0, 3)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if either component is too large.
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, GameError> {
        if row >= SIZE || column >= SIZE {
            return Err(GameError::OutOfBounds { row, column });
        }
        Ok(Self { row, column })
    }

    /// Creates coordinates from known-good constants.
    pub(crate) const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Creates coordinates from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self::at(index / SIZE, index % SIZE))
    }

    /// Returns the row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0-2).
    pub fn column(self) -> usize {
        self.column
    }

    /// Returns the row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.column
    }

    /// Iterates over every position in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinates> {
        (0..CELL_COUNT).map(|i| Self::at(i / SIZE, i % SIZE))
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column {}", self.row, self.column)
    }
}

/// Copied-out view of every cell value, row-major.
pub type Grid = [[CellValue; SIZE]; SIZE];

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Nobody has won and empty cells remain.
    InProgress,
    /// A player completed a line.
    Won {
        /// Winning mark.
        mark: Mark,
        /// First completed line in scan order.
        line: crate::Line,
    },
    /// Board is full and nobody won.
    Draw,
}

impl GameStatus {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Checks if the game has been decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
