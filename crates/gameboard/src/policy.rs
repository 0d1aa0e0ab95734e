//! Move selection for the computer-controlled player.

use crate::{Board, Coordinates};
use tracing::{debug, instrument};

/// Chooses where the computer plays.
pub trait MovePolicy: std::fmt::Debug + Send {
    /// Picks a cell on `board`, or `None` when no move is available.
    fn choose(&self, board: &Board) -> Option<Coordinates>;

    /// Returns the policy's display name.
    fn name(&self) -> &str;
}

/// Plays the first empty cell, scanning rows top to bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmpty;

impl MovePolicy for FirstEmpty {
    #[instrument(skip(self, board))]
    fn choose(&self, board: &Board) -> Option<Coordinates> {
        let choice = board.first_empty();
        debug!(?choice, "First empty cell");
        choice
    }

    fn name(&self) -> &str {
        "first-empty"
    }
}
