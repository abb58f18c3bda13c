//! Per-game state records
//!
//! Everything a `ChessGame` tracks besides the board itself.
//!
//! ## Turn Management
//! - [`CurrentTurn`] - Whose turn it is and the move number
//! - [`TurnPhase`] - Awaiting a move, awaiting a promotion choice, or over
//!
//! ## Move Bookkeeping
//! - [`MoveDetails`] - What the most recent move did
//! - [`PendingPromotion`] - A pawn waiting to be replaced
//! - [`CapturedPieces`] - Material tracking and advantage calculation
//!
//! ## Game Status
//! - [`GameOutcome`] - In progress, checkmate or stalemate

pub mod captured;
pub mod game_over;
pub mod move_details;
pub mod promotion;
pub mod turn;

pub use captured::*;
pub use game_over::*;
pub use move_details::*;
pub use promotion::*;
pub use turn::*;
