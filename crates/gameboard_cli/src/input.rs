//! Parses one line of user input into a command.

use derive_more::{Display, Error};
use gameboard::Coordinates;
use tracing::instrument;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop a token at a row and column (0-based, not yet validated).
    Move {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
    /// Start a new game without scoring the current one.
    Reset,
    /// Show the score.
    Score,
    /// Show the accepted commands.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Blank line.
    #[display("Empty input")]
    Empty,
    /// Keypad digit outside 1-9.
    #[display("Keypad position {_0} is not between 1 and 9")]
    Keypad(#[error(not(source))] u32),
    /// Anything else.
    #[display("Unrecognized input: {_0:?}")]
    Unrecognized(#[error(not(source))] String),
}

/// Usage text shown for `help`.
pub const HELP: &str = "Enter `row column` (0-2 each, e.g. `1 2` or `1,2`), \
a keypad digit 1-9, `reset`, `score`, `help` or `quit`.";

/// Parses a line such as `1 2`, `1,2`, `5`, `reset` or `quit`.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    match trimmed.to_lowercase().as_str() {
        "reset" | "restart" | "r" => return Ok(Command::Reset),
        "score" | "s" => return Ok(Command::Score),
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let unrecognized = || InputError::Unrecognized(trimmed.to_string());

    match parts.as_slice() {
        [digit] => {
            let key: u32 = digit.parse().map_err(|_| unrecognized())?;
            let at = (key as usize)
                .checked_sub(1)
                .and_then(Coordinates::from_index)
                .ok_or(InputError::Keypad(key))?;
            Ok(Command::Move {
                row: at.row(),
                column: at.column(),
            })
        }
        [row, column] => Ok(Command::Move {
            row: row.parse().map_err(|_| unrecognized())?,
            column: column.parse().map_err(|_| unrecognized())?,
        }),
        _ => Err(unrecognized()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_column_pairs() {
        assert_eq!(parse_command("1 2"), Ok(Command::Move { row: 1, column: 2 }));
        assert_eq!(parse_command(" 0,2 "), Ok(Command::Move { row: 0, column: 2 }));
        assert_eq!(parse_command("2, 0"), Ok(Command::Move { row: 2, column: 0 }));
    }

    #[test]
    fn test_out_of_range_pair_is_left_to_the_game() {
        assert_eq!(parse_command("3 1"), Ok(Command::Move { row: 3, column: 1 }));
    }

    #[test]
    fn test_keypad_digits() {
        assert_eq!(parse_command("1"), Ok(Command::Move { row: 0, column: 0 }));
        assert_eq!(parse_command("5"), Ok(Command::Move { row: 1, column: 1 }));
        assert_eq!(parse_command("9"), Ok(Command::Move { row: 2, column: 2 }));
        assert_eq!(parse_command("4"), Ok(Command::Move { row: 1, column: 0 }));
        assert_eq!(parse_command("0"), Err(InputError::Keypad(0)));
        assert_eq!(parse_command("10"), Err(InputError::Keypad(10)));
    }

    #[test]
    fn test_words() {
        assert_eq!(parse_command("RESET"), Ok(Command::Reset));
        assert_eq!(parse_command("score"), Ok(Command::Score));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_command("   "), Err(InputError::Empty));
        assert!(matches!(parse_command("a b"), Err(InputError::Unrecognized(_))));
        assert!(matches!(parse_command("1 2 3"), Err(InputError::Unrecognized(_))));
        assert!(matches!(parse_command("-1 0"), Err(InputError::Unrecognized(_))));
    }
}
