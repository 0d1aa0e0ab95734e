//! Gameboard - tic-tac-toe game logic
//!
//! A small, deterministic state machine for two-player tic-tac-toe with a
//! rule-based computer opponent.
//!
//! # Architecture
//!
//! - **Cell**: one square, empty or holding a [`Mark`]
//! - **Board**: fixed 3x3 grid of cells; placement and reset
//! - **GameController**: two players, the active-player pointer, rounds and
//!   the computer reply
//! - **rules**: win and draw evaluation over a grid snapshot
//!
//! # Example
//!
//! ```
//! use gameboard::{CellValue, GameController, Mark};
//!
//! let mut game = GameController::default();
//! let report = game.play_round(0, 0)?;
//!
//! // The computer answers at the first empty cell.
//! assert_eq!(report.rounds().len(), 2);
//! assert_eq!(game.snapshot()[0][1], CellValue::Marked(Mark::O));
//! assert_eq!(*game.active_player().mark(), Mark::X);
//! # Ok::<(), gameboard::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod controller;
mod error;
mod player;
mod policy;
pub mod rules;
mod types;

pub use board::{Board, DropOutcome};
pub use config::{GameConfig, Opponent, PLAYER_ONE_ENV, PLAYER_TWO_ENV, TurnPolicy};
pub use controller::{GameController, GameSnapshot, Round, RoundReport};
pub use error::{ConfigError, GameError};
pub use player::{Player, Seat};
pub use policy::{FirstEmpty, MovePolicy};
pub use rules::Line;
pub use types::{CELL_COUNT, Cell, CellValue, Coordinates, GameStatus, Grid, Mark, SIZE};
