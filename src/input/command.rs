//! Console command parsing
//!
//! One command per line:
//!
//! | Input                     | Command                          |
//! |---------------------------|----------------------------------|
//! | `e2e4`, `e2 e4`, `e2-e4`  | move                             |
//! | `1`-`4`, `q` `r` `b` `n`  | promotion choice                 |
//! | `moves e2`                | legal destinations of a piece    |
//! | `board`                   | redraw the board                 |
//! | `help`, `?`               | command summary                  |
//! | `quit`, `exit`            | leave                            |

use thiserror::Error;

use crate::game::error::SquareParseError;
use crate::game::resources::parse_promotion_choice;
use crate::game::types::{PieceType, Square};

/// A parsed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Square, to: Square },
    Promote(PieceType),
    Hints(Square),
    Board,
    Help,
    Quit,
}

/// Why a console line could not be understood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Please enter a command (type 'help' for a list).")]
    Empty,

    #[error("Invalid input! Please enter a number between 1 and 4 or one of q, r, b, n.")]
    InvalidPromotionChoice,

    #[error(transparent)]
    InvalidSquare(#[from] SquareParseError),

    #[error("Unrecognized command '{0}' (type 'help' for a list).")]
    Unknown(String),
}

/// Parse one line of console input
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim().to_ascii_lowercase();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    match line.as_str() {
        "quit" | "exit" => return Ok(Command::Quit),
        "help" | "?" => return Ok(Command::Help),
        "board" => return Ok(Command::Board),
        _ => {}
    }

    if let Some(square) = line.strip_prefix("moves ") {
        return Ok(Command::Hints(square.parse()?));
    }

    if line.chars().count() == 1 {
        return parse_promotion_choice(&line)
            .map(Command::Promote)
            .ok_or(CommandError::InvalidPromotionChoice);
    }

    let compact: String = line.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if compact.len() == 4 && compact.is_ascii() {
        let (from, to) = compact.split_at(2);
        return Ok(Command::Move {
            from: from.parse()?,
            to: to.parse()?,
        });
    }

    Err(CommandError::Unknown(line))
}
