//! Text front end: renders the board, keeps score and restarts finished games.

use crate::input::{Command, HELP, parse_command};
use crate::score::Score;
use anyhow::Result;
use gameboard::{DropOutcome, GameController, GameSnapshot, GameStatus, Mark, Round, TurnPolicy};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Final state printed by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Board, active player and status when the session ended.
    pub game: GameSnapshot,
    /// Tally of finished games.
    pub score: Score,
}

/// Drives a [`GameController`] from lines of text.
#[derive(Debug)]
pub struct Screen {
    game: GameController,
    score: Score,
    restart_delay: Duration,
}

impl Screen {
    /// Creates a screen around a fresh controller.
    pub fn new(game: GameController, restart_delay: Duration) -> Self {
        Self {
            game,
            score: Score::new(),
            restart_delay,
        }
    }

    /// The controller being driven.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Tally so far.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Snapshot of the session for `--json`.
    pub fn summary(&self) -> Summary {
        Summary {
            game: self.game.game_snapshot(),
            score: self.score,
        }
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> Result<()> {
        info!("Starting session");
        writeln!(output, "{}", self.score)?;
        self.render(output)?;
        writeln!(output, "{}'s turn...", self.game.active_player().name())?;

        for line in input.lines() {
            let line = line?;
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    warn!(error = %e, "Bad input");
                    writeln!(output, "{}. Type `help` for options.", e)?;
                    continue;
                }
            };
            debug!(?command, "Parsed command");

            match command {
                Command::Move { row, column } => self.play(row, column, output)?,
                Command::Reset => self.restart(output)?,
                Command::Score => writeln!(output, "{}", self.score)?,
                Command::Help => writeln!(output, "{}", HELP)?,
                Command::Quit => break,
            }
            output.flush()?;
        }

        info!(score = %self.score, "Session finished");
        Ok(())
    }

    /// Plays one move and reports what happened.
    #[instrument(skip(self, output))]
    pub fn play(&mut self, row: usize, column: usize, output: &mut impl Write) -> Result<()> {
        let report = match self.game.play_round(row, column) {
            Ok(report) => report,
            Err(e) => {
                writeln!(output, "{}", e)?;
                return Ok(());
            }
        };

        for round in report.rounds() {
            self.describe(round, output)?;
        }
        self.update(report.status(), output)
    }

    fn describe(&self, round: &Round, output: &mut impl Write) -> Result<()> {
        match round.outcome() {
            DropOutcome::Placed if round.by_computer() => {
                writeln!(output, "Computer plays at {}.", round.coordinates())?;
            }
            DropOutcome::Placed => {}
            DropOutcome::Occupied(holder) => {
                let consequence = match self.game.turn_policy() {
                    TurnPolicy::AdvanceAlways => "turn lost",
                    TurnPolicy::AdvanceOnAccept => "try again",
                };
                writeln!(
                    output,
                    "{} is already taken by {}, {}.",
                    round.coordinates(),
                    holder,
                    consequence
                )?;
            }
        }
        Ok(())
    }

    fn update(&mut self, status: GameStatus, output: &mut impl Write) -> Result<()> {
        self.render(output)?;
        if !status.is_over() {
            writeln!(output, "{}'s turn...", self.game.active_player().name())?;
            return Ok(());
        }

        self.score.record(status);
        if let GameStatus::Won { mark, line } = status {
            writeln!(output, "{} wins! ({})", self.name_of(mark), line)?;
        } else {
            writeln!(output, "It's a draw!")?;
        }
        writeln!(output, "{}", self.score)?;
        self.restart(output)
    }

    fn restart(&mut self, output: &mut impl Write) -> Result<()> {
        if !self.restart_delay.is_zero() {
            output.flush()?;
            std::thread::sleep(self.restart_delay);
        }
        self.game.reset_board();
        self.render(output)?;
        writeln!(
            output,
            "New Game! {}'s turn...",
            self.game.active_player().name()
        )?;
        Ok(())
    }

    fn render(&self, output: &mut impl Write) -> Result<()> {
        writeln!(output, "\n{}\n", self.game.board())?;
        Ok(())
    }

    fn name_of(&self, mark: Mark) -> &str {
        self.game
            .players()
            .iter()
            .find(|player| *player.mark() == mark)
            .map_or("Nobody", |player| player.name().as_str())
    }
}
