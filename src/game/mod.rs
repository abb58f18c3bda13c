//! Chess game logic module
//!
//! Clean separation between pure rules and the per-game turn protocol:
//!
//! # Module Organization
//!
//! - `types` - Colors, piece kinds and the `Square` coordinate
//! - `components` - The piece model stored in board cells
//! - `rules` - Pure chess logic (move validation, execution, game end)
//! - `resources` - Turn, outcome, promotion and capture records of one game
//! - `session` - `ChessGame`, the public API front ends talk to
//! - `error` - Gameplay error values
//!
//! # Flow of a move
//!
//! 1. `session` checks the turn protocol (game over, promotion pending, turn)
//! 2. `rules::validation` checks geometry, king safety, friendly fire
//! 3. `rules::execution` mutates the board and records `MoveDetails`
//! 4. `rules::status` classifies the position for the next side to move

pub mod components;
pub mod error;
pub mod resources;
pub mod rules;
pub mod session;
pub mod types;

pub use error::{GameResult, MoveError, PromotionRejection};
pub use session::{ChessGame, MoveResult};
pub use types::{PieceColor, PieceType, Square};
