//! Move input parsing and validation.

use std::io::{self, BufRead};
use std::str::FromStr;

use common::Square;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h][1-8])([a-h][1-8])$").expect("COORD_RE regex should be valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    Coordinate { from: Square, to: Square },
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();
        if matches!(trimmed.as_str(), "q" | "quit" | "exit") {
            return Err(InputError::UserExit);
        }

        let invalid = || InputError::InvalidInput {
            input: trimmed.clone(),
        };
        let caps = COORD_RE.captures(&trimmed).ok_or_else(|| invalid())?;
        let from = Square::from_algebraic(&caps[1]).map_err(|_| invalid())?;
        let to = Square::from_algebraic(&caps[2]).map_err(|_| invalid())?;

        Ok(MoveInput::Coordinate { from, to })
    }
}

/// Reads one move from stdin.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    read_move_input(&mut io::stdin().lock())
}

/// Reads one line from `reader` and parses it as a move. End of input counts
/// as the player leaving.
pub fn read_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let bytes_read = reader
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;
    if bytes_read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::square::*;

    #[test]
    fn test_parse_coordinate_move() {
        assert_eq!(
            "b2c4".parse::<MoveInput>(),
            Ok(MoveInput::Coordinate { from: B2, to: C4 })
        );
        assert_eq!(
            "  E2E4\n".parse::<MoveInput>(),
            Ok(MoveInput::Coordinate { from: E2, to: E4 })
        );
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!("q".parse::<MoveInput>(), Err(InputError::UserExit));
        assert_eq!("quit".parse::<MoveInput>(), Err(InputError::UserExit));
    }

    #[test]
    fn test_parse_invalid() {
        for input in &["", "b2", "b2c9", "i2c4", "Nc3", "b2-c4"] {
            assert_eq!(
                input.parse::<MoveInput>(),
                Err(InputError::InvalidInput {
                    input: input.to_lowercase()
                })
            );
        }
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut reader: &[u8] = &[];
        assert_eq!(read_move_input(&mut reader), Err(InputError::UserExit));
    }

    #[test]
    fn test_read_lines_in_order() {
        let mut reader: &[u8] = b"b2c4\nzz\n\n";
        assert_eq!(
            read_move_input(&mut reader),
            Ok(MoveInput::Coordinate { from: B2, to: C4 })
        );
        assert_eq!(
            read_move_input(&mut reader),
            Err(InputError::InvalidInput {
                input: "zz".to_string()
            })
        );
        // a blank line is a typo, not the end of input
        assert_eq!(
            read_move_input(&mut reader),
            Err(InputError::InvalidInput {
                input: String::new()
            })
        );
        assert_eq!(read_move_input(&mut reader), Err(InputError::UserExit));
    }
}
