//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Grid;
use tracing::instrument;

/// Checks if the grid is full (all cells marked).
#[instrument]
pub fn is_full(grid: &Grid) -> bool {
    grid.iter().flatten().all(|value| !value.is_empty())
}

/// A full grid with no winner.
#[instrument]
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellValue, Mark};

    const E: CellValue = CellValue::Empty;
    const X: CellValue = CellValue::Marked(Mark::X);
    const O: CellValue = CellValue::Marked(Mark::O);

    #[test]
    fn test_empty_grid_not_full() {
        assert!(!is_full(&[[E; 3]; 3]));
    }

    #[test]
    fn test_partial_grid_not_full() {
        let grid = [[X, O, X], [O, E, X], [O, X, O]];
        assert!(!is_full(&grid));
        assert!(!is_draw(&grid));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let grid = [[X, O, X], [O, X, X], [O, X, O]];
        assert!(is_full(&grid));
        assert!(is_draw(&grid));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let grid = [[X, X, X], [O, O, X], [X, O, O]];
        assert!(is_full(&grid));
        assert!(!is_draw(&grid));
    }
}
