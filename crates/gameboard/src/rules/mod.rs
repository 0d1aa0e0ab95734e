//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`] snapshot. The controller uses them to
//! report [`GameStatus`] after each round, and front ends can call them
//! directly on any grid they hold.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner};

use crate::{GameStatus, Grid};
use tracing::instrument;

/// Evaluates a grid: a winner first, then a draw, else still in progress.
#[instrument]
pub fn evaluate(grid: &Grid) -> GameStatus {
    if let Some((mark, line)) = check_winner(grid) {
        return GameStatus::Won { mark, line };
    }
    if is_full(grid) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellValue, Mark};

    const E: CellValue = CellValue::Empty;
    const X: CellValue = CellValue::Marked(Mark::X);
    const O: CellValue = CellValue::Marked(Mark::O);

    #[test]
    fn test_empty_grid_in_progress() {
        assert_eq!(evaluate(&[[E; 3]; 3]), GameStatus::InProgress);
    }

    #[test]
    fn test_win_beats_full_board() {
        // Full board where X also completes the top row
        let grid = [[X, X, X], [O, O, X], [X, O, O]];
        assert_eq!(
            evaluate(&grid),
            GameStatus::Won {
                mark: Mark::X,
                line: Line::TopRow
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let grid = [[X, O, X], [O, X, X], [O, X, O]];
        assert_eq!(evaluate(&grid), GameStatus::Draw);
    }
}
