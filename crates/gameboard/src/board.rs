//! The 3x3 board and its placement rules.

use crate::types::{CellValue, Grid, SIZE};
use crate::{Cell, Coordinates, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of dropping a token onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// The cell was empty and now holds the token.
    Placed,
    /// The cell already held the carried mark; nothing changed.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells in row-major order.
    grid: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            grid: [[Cell::new(); SIZE]; SIZE],
        }
    }

    /// Read-only view of the cells.
    pub fn grid(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.grid
    }

    /// Returns the cell at the given position.
    pub fn cell(&self, at: Coordinates) -> &Cell {
        &self.grid[at.row()][at.column()]
    }

    /// Copies every cell value out of the board.
    pub fn snapshot(&self) -> Grid {
        self.grid.map(|row| row.map(|cell| cell.value()))
    }

    /// Places `mark` at `at` unless the cell is already taken.
    ///
    /// An occupied cell is left untouched and reported as
    /// [`DropOutcome::Occupied`].
    #[instrument(skip(self))]
    pub fn drop_token(&mut self, at: Coordinates, mark: Mark) -> DropOutcome {
        let cell = &mut self.grid[at.row()][at.column()];
        if let CellValue::Marked(existing) = cell.value() {
            debug!(?existing, "Cell already taken, ignoring drop");
            return DropOutcome::Occupied(existing);
        }
        cell.add_token(mark);
        DropOutcome::Placed
    }

    /// Renders every cell value, one row per line.
    #[instrument(skip(self))]
    pub fn print_board(&self) -> String {
        let rendered = self
            .grid
            .iter()
            .map(|row| {
                let values: Vec<String> =
                    row.iter().map(|c| c.value().symbol().to_string()).collect();
                format!("[{}]", values.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n");
        debug!(board = %rendered, "Board state");
        rendered
    }

    /// Replaces every cell with a fresh empty one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        for row in self.grid.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Cell::new();
            }
        }
    }

    /// Returns the first empty position in row-major order.
    pub fn first_empty(&self) -> Option<Coordinates> {
        self.empty_cells().next()
    }

    /// Iterates over empty positions in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinates> + '_ {
        Coordinates::all().filter(|at| self.cell(*at).is_empty())
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }
}

/// Draws the board with keypad numbers (1-9) in empty cells.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = match cell.value() {
                    CellValue::Empty => char::from_digit((r * SIZE + c + 1) as u32, 10)
                        .unwrap_or('.'),
                    CellValue::Marked(mark) => mark.symbol(),
                };
                write!(f, "{symbol}")?;
                if c < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if r < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, column: usize) -> Coordinates {
        Coordinates::new(row, column).expect("in range")
    }

    #[test]
    fn test_drop_on_empty_sets_only_that_cell() {
        for target in Coordinates::all() {
            let mut board = Board::new();
            assert_eq!(board.drop_token(target, Mark::X), DropOutcome::Placed);
            for other in Coordinates::all() {
                let expected = if other == target {
                    CellValue::Marked(Mark::X)
                } else {
                    CellValue::Empty
                };
                assert_eq!(board.cell(other).value(), expected);
            }
        }
    }

    #[test]
    fn test_drop_on_occupied_is_ignored() {
        let mut board = Board::new();
        board.drop_token(at(1, 1), Mark::X);
        let before = board.snapshot();

        assert_eq!(
            board.drop_token(at(1, 1), Mark::O),
            DropOutcome::Occupied(Mark::X)
        );
        assert_eq!(board.snapshot(), before);
        assert_eq!(board.cell(at(1, 1)).value(), CellValue::Marked(Mark::X));
    }

    #[test]
    fn test_reset_empties_every_cell() {
        let mut board = Board::new();
        for (i, target) in Coordinates::all().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.drop_token(target, mark);
        }
        assert!(board.is_full());

        board.reset();
        assert!(board.grid().iter().flatten().all(Cell::is_empty));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut board = Board::new();
        assert_eq!(board.first_empty(), Some(at(0, 0)));
        board.drop_token(at(0, 0), Mark::X);
        board.drop_token(at(0, 1), Mark::O);
        assert_eq!(board.first_empty(), Some(at(0, 2)));
    }

    #[test]
    fn test_print_board() {
        let mut board = Board::new();
        board.drop_token(at(0, 0), Mark::X);
        board.drop_token(at(2, 1), Mark::O);
        assert_eq!(board.print_board(), "[X, ., .]\n[., ., .]\n[., O, .]");
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.drop_token(at(1, 1), Mark::O);
        assert_eq!(board.to_string(), "1|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
