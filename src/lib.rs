pub mod core;
pub mod game;
pub mod input;
pub mod ui;

pub use game::{ChessGame, MoveError, MoveResult, PieceColor, PieceType, Square};
