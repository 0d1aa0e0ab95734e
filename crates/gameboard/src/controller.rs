//! Round orchestration: turns, the computer reply, and resets.

use crate::config::{GameConfig, Opponent, TurnPolicy};
use crate::player::{Player, Seat};
use crate::policy::{FirstEmpty, MovePolicy};
use crate::types::CELL_COUNT;
use crate::{Board, Coordinates, DropOutcome, GameError, GameStatus, Grid, Mark, rules};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// One applied round: a token dropped and the turn handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    mark: Mark,
    coordinates: Coordinates,
    outcome: DropOutcome,
    by_computer: bool,
}

impl Round {
    /// Mark that was dropped.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Target cell.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Whether the token landed.
    pub fn outcome(&self) -> DropOutcome {
        self.outcome
    }

    /// Whether the computer chose this cell.
    pub fn by_computer(&self) -> bool {
        self.by_computer
    }
}

/// Everything that happened during one [`GameController::play_round`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    rounds: Vec<Round>,
    status: GameStatus,
}

impl RoundReport {
    /// Rounds in the order they were applied. The first is always the
    /// caller's own move.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// The caller's round.
    pub fn requested(&self) -> Option<&Round> {
        self.rounds.first()
    }

    /// The computer's reply, if it played.
    pub fn computer_reply(&self) -> Option<&Round> {
        self.rounds.iter().find(|round| round.by_computer)
    }

    /// Game status once every round was applied.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

/// Serializable picture of the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Cell values, row-major.
    pub grid: Grid,
    /// Player on turn.
    pub active_player: Player,
    /// Current status.
    pub status: GameStatus,
}

/// Drives a game between two players on one board.
///
/// Player one always holds X and starts; player two holds O. When the
/// opponent is [`Opponent::Computer`], every round that hands the turn to
/// O is answered immediately by the configured [`MovePolicy`].
///
/// The controller keeps accepting rounds after the game is decided; callers
/// check [`GameController::status`] to stop.
#[derive(Debug)]
pub struct GameController {
    board: Board,
    players: [Player; 2],
    active: Seat,
    opponent: Opponent,
    turn_policy: TurnPolicy,
    policy: Box<dyn MovePolicy>,
}

impl GameController {
    /// Creates a controller using the first-empty-cell computer.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_policy(config, Box::new(FirstEmpty))
    }

    /// Creates a controller with a custom computer policy.
    #[instrument(skip_all, fields(policy = policy.name()))]
    pub fn with_policy(config: &GameConfig, policy: Box<dyn MovePolicy>) -> Self {
        let controller = Self {
            board: Board::new(),
            players: [
                Player::new(config.player_one_name().as_str(), Seat::One.mark()),
                Player::new(config.player_two_name().as_str(), Seat::Two.mark()),
            ],
            active: Seat::One,
            opponent: *config.opponent(),
            turn_policy: *config.turn_policy(),
            policy,
        };
        controller.announce_round();
        controller
    }

    /// Read-only board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copies the current cell values out.
    pub fn snapshot(&self) -> Grid {
        self.board.snapshot()
    }

    /// Both players, player one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player currently on turn.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    /// Seat currently on turn.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Who controls player two.
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// Turn handling for occupied cells.
    pub fn turn_policy(&self) -> TurnPolicy {
        self.turn_policy
    }

    /// Passes the turn to the other player.
    #[instrument(skip(self))]
    pub fn switch_player_turn(&mut self) {
        self.active = self.active.toggle();
        debug!(active = %self.active_player().name(), "Turn switched");
    }

    /// Status computed from the current board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board.snapshot())
    }

    /// Board, active player and status in one serializable value.
    pub fn game_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.snapshot(),
            active_player: self.active_player().clone(),
            status: self.status(),
        }
    }

    /// Plays the active player's token at `(row, column)`.
    ///
    /// Dropping onto an occupied cell changes nothing on the board; whether
    /// the turn still passes depends on the [`TurnPolicy`]. If the turn ends
    /// with player two on move against a computer opponent, the computer
    /// plays before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] without touching any state if the
    /// coordinates fall outside the board.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, row: usize, column: usize) -> Result<RoundReport, GameError> {
        let at = Coordinates::new(row, column).inspect_err(|e| {
            warn!(error = %e, "Rejecting move");
        })?;

        let mut rounds = vec![self.apply_round(at, false)];
        while self.computer_due() && rounds.len() <= CELL_COUNT {
            match self.computer_play() {
                Some(round) => rounds.push(round),
                None => break,
            }
        }

        Ok(RoundReport {
            rounds,
            status: self.status(),
        })
    }

    /// Lets the policy play one round for the active player.
    ///
    /// Does nothing and returns `None` when the board is full.
    #[instrument(skip(self), fields(policy = self.policy.name()))]
    pub fn computer_play(&mut self) -> Option<Round> {
        let Some(at) = self.policy.choose(&self.board) else {
            debug!("No empty cell left for the computer");
            return None;
        };
        info!(row = at.row(), column = at.column(), "Computer plays at {}", at);
        Some(self.apply_round(at, true))
    }

    /// Clears the board and gives the turn back to player one.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.board.reset();
        self.active = Seat::One;
        self.announce_round();
    }

    fn computer_due(&self) -> bool {
        self.opponent == Opponent::Computer
            && self.active_player().mark() == self.players[Seat::Two.index()].mark()
    }

    fn apply_round(&mut self, at: Coordinates, by_computer: bool) -> Round {
        let mark = *self.active_player().mark();
        info!(
            "Dropping {}'s token into row {}, column {}...",
            self.active_player().name(),
            at.row(),
            at.column()
        );

        let outcome = self.board.drop_token(at, mark);
        match (outcome, self.turn_policy) {
            (DropOutcome::Placed, _) => self.switch_player_turn(),
            (DropOutcome::Occupied(holder), TurnPolicy::AdvanceAlways) => {
                warn!(%at, ?holder, "Cell occupied, turn passes anyway");
                self.switch_player_turn();
            }
            (DropOutcome::Occupied(holder), TurnPolicy::AdvanceOnAccept) => {
                warn!(%at, ?holder, "Cell occupied, turn kept");
            }
        }

        self.announce_round();
        Round {
            mark,
            coordinates: at,
            outcome,
            by_computer,
        }
    }

    fn announce_round(&self) {
        self.board.print_board();
        info!("{}'s turn.", self.active_player().name());
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
