//! Running tally of finished games.

use gameboard::{GameStatus, Mark};
use serde::Serialize;
use tracing::{info, instrument};

/// Wins per mark and draws since the program started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Score {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Draws recorded.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Counts a finished game. In-progress statuses are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won { mark: Mark::X, .. } => self.x_wins += 1,
            GameStatus::Won { mark: Mark::O, .. } => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        info!(score = %self, "Score updated");
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score: X {} wins, O {} wins, {} draws",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameboard::Line;

    #[test]
    fn test_record() {
        let mut score = Score::new();
        score.record(GameStatus::Won {
            mark: Mark::X,
            line: Line::TopRow,
        });
        score.record(GameStatus::Draw);
        score.record(GameStatus::InProgress);

        assert_eq!(score.wins(Mark::X), 1);
        assert_eq!(score.wins(Mark::O), 0);
        assert_eq!(score.draws(), 1);
        assert_eq!(score.to_string(), "Score: X 1 wins, O 0 wins, 1 draws");
    }
}
