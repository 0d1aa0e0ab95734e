//! Terminal front end for the gameboard engine.
//!
//! Reads `row column` moves from text input, renders the board, announces
//! the winner, keeps score and restarts finished games.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod input;
mod logging;
mod score;
mod screen;

pub use cli::Cli;
pub use input::{Command, HELP, InputError, parse_command};
pub use logging::{DEFAULT_LOG_FILTER, env_filter, init_tracing};
pub use score::Score;
pub use screen::{Screen, Summary};
