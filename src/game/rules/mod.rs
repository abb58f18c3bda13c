//! Chess rules module - pure game logic
//!
//! Move validation, move execution and game-end detection as plain functions
//! over a [`BoardState`]. Nothing here knows about turns being paused for a
//! promotion or about front ends; [`crate::game::ChessGame`] strings these
//! pieces together into the turn protocol.
//!
//! # Module Structure
//!
//! - `board_state` - 8×8 grid of pieces, path queries, snapshots
//! - `piece_moves` - Pseudo-legal geometry and attack patterns per piece kind
//! - `attack` - Square attack queries and the king-safety simulation
//! - `validation` - Ordered legality check with specific failure reasons
//! - `execution` - Applies validated moves (captures, castling, en passant)
//! - `status` - Checkmate/stalemate classification

pub mod attack;
pub mod board_state;
pub mod execution;
pub mod piece_moves;
pub mod status;
pub mod validation;


// Re-export commonly used items
pub use attack::{is_king_in_check, is_square_under_attack, would_leave_king_in_check};
pub use board_state::{BoardSnapshot, BoardState, SnapshotPiece};
pub use execution::{clear_en_passant_flags, execute_move};
pub use piece_moves::{get_possible_moves, is_valid_move};
pub use status::{evaluate_status, has_any_legal_move};
pub use validation::{is_legal_move, legal_destinations, validate_move};
