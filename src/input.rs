//! Lexical parsing of raw player input.

use derive_more::{Display, Error};
use strictly_pawns::Move;
use tracing::instrument;

/// A well-formed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the game.
    Exit,
    /// Play a move.
    Move(Move),
}

/// Input that is neither `exit` nor four coordinate characters.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid Input")]
pub struct InputError {
    /// The rejected line.
    pub line: String,
}

/// Parses one line of input.
///
/// Accepts `exit`, or a move of the shape `[a-h][1-8][a-h][1-8]`
/// (files are case-insensitive). Surrounding whitespace is ignored.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed == "exit" {
        return Ok(Command::Exit);
    }
    Move::from_coordinates(trimmed)
        .map(Command::Move)
        .ok_or_else(|| InputError {
            line: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit() {
        assert_eq!(parse_command("exit\n"), Ok(Command::Exit));
    }

    #[test]
    fn test_move() {
        let expected = Move::from_coordinates("e2e4").unwrap();
        assert_eq!(parse_command("e2e4"), Ok(Command::Move(expected)));
        assert_eq!(parse_command("E2E4\n"), Ok(Command::Move(expected)));
    }

    #[test]
    fn test_malformed() {
        for line in ["", "e2", "e2-e4", "e9e4", "i2i4", "e2e4e", "Exit"] {
            let err = parse_command(line).unwrap_err();
            assert_eq!(err.to_string(), "Invalid Input");
        }
    }
}
