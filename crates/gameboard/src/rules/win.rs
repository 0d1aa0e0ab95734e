//! Win detection logic for tic-tac-toe.

use crate::types::Coordinates;
use crate::{CellValue, Grid, Mark};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight lines that win the game.
///
/// Variants are declared in scan order: rows, then columns, then diagonals.
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
    strum::EnumIter,
)]
pub enum Line {
    /// Row 0.
    #[strum(to_string = "top row")]
    TopRow,
    /// Row 1.
    #[strum(to_string = "middle row")]
    MiddleRow,
    /// Row 2.
    #[strum(to_string = "bottom row")]
    BottomRow,
    /// Column 0.
    #[strum(to_string = "left column")]
    LeftColumn,
    /// Column 1.
    #[strum(to_string = "center column")]
    CenterColumn,
    /// Column 2.
    #[strum(to_string = "right column")]
    RightColumn,
    /// Top-left to bottom-right.
    #[strum(to_string = "main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[strum(to_string = "anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Returns the three positions on this line.
    pub fn cells(self) -> [Coordinates; 3] {
        let at = Coordinates::at;
        match self {
            Line::TopRow => [at(0, 0), at(0, 1), at(0, 2)],
            Line::MiddleRow => [at(1, 0), at(1, 1), at(1, 2)],
            Line::BottomRow => [at(2, 0), at(2, 1), at(2, 2)],
            Line::LeftColumn => [at(0, 0), at(1, 0), at(2, 0)],
            Line::CenterColumn => [at(0, 1), at(1, 1), at(2, 1)],
            Line::RightColumn => [at(0, 2), at(1, 2), at(2, 2)],
            Line::MainDiagonal => [at(0, 0), at(1, 1), at(2, 2)],
            Line::AntiDiagonal => [at(0, 2), at(1, 1), at(2, 0)],
        }
    }
}

/// Checks if there is a winner on the grid.
///
/// Lines are scanned in [`Line`] order and the first line holding three
/// equal, non-empty values wins.
#[instrument]
pub fn check_winner(grid: &Grid) -> Option<(Mark, Line)> {
    let value = |at: Coordinates| grid[at.row()][at.column()];

    Line::iter().find_map(|line| {
        let [a, b, c] = line.cells().map(value);
        match a {
            CellValue::Marked(mark) if a == b && b == c => Some((mark, line)),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: CellValue = CellValue::Empty;
    const X: CellValue = CellValue::Marked(Mark::X);
    const O: CellValue = CellValue::Marked(Mark::O);

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(check_winner(&[[E; 3]; 3]), None);
    }

    #[test]
    fn test_row_reported_before_diagonal() {
        // Rows are scanned before columns and diagonals
        let grid = [[X, X, X], [E, O, E], [O, E, O]];
        assert_eq!(check_winner(&grid), Some((Mark::X, Line::TopRow)));
    }

    #[test]
    fn test_column_winner() {
        let grid = [[X, O, E], [X, O, E], [E, O, X]];
        assert_eq!(check_winner(&grid), Some((Mark::O, Line::CenterColumn)));
    }

    #[test]
    fn test_anti_diagonal_winner() {
        let grid = [[X, X, O], [E, O, E], [O, E, X]];
        assert_eq!(check_winner(&grid), Some((Mark::O, Line::AntiDiagonal)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let grid = [[X, X, E], [E, O, E], [E, E, O]];
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_scan_order() {
        let order: Vec<Line> = Line::iter().collect();
        assert_eq!(order.first(), Some(&Line::TopRow));
        assert_eq!(order.get(3), Some(&Line::LeftColumn));
        assert_eq!(order.last(), Some(&Line::AntiDiagonal));
        assert_eq!(Line::MainDiagonal.to_string(), "main diagonal");
    }
}
