//! Full legality check for a single move
//!
//! Order matters: geometry first, then the king-safety simulation (only a
//! geometrically valid destination is ever simulated), then friendly fire.

use tracing::debug;

use super::attack::would_leave_king_in_check;
use super::board_state::BoardState;
use super::piece_moves::is_valid_move;
use crate::game::error::{GameResult, MoveError};
use crate::game::types::Square;

/// Validate moving the piece on `from` to `to`, ignoring whose turn it is
pub fn validate_move(board: &mut BoardState, from: Square, to: Square) -> GameResult<()> {
    let Some(piece) = board.piece_at(from).copied() else {
        return Err(MoveError::EmptySource);
    };

    if !is_valid_move(board, from, to) {
        debug!("[RULES] {:?} {} cannot reach {} from {}", piece.color, piece.piece_type, to, from);
        return Err(MoveError::IllegalGeometry);
    }

    if would_leave_king_in_check(board, from, to) {
        debug!("[RULES] {} -> {} would leave the {:?} king in check", from, to, piece.color);
        return Err(MoveError::SelfCheck);
    }

    if board.get_piece_color(to) == Some(piece.color) {
        debug!("[RULES] {} -> {} lands on a friendly piece", from, to);
        return Err(MoveError::FriendlyFire);
    }

    Ok(())
}

/// Whether the piece on `from` may legally move to `to`
pub fn is_legal_move(board: &mut BoardState, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from).copied() else {
        return false;
    };
    if board.get_piece_color(to) == Some(piece.color) {
        return false;
    }
    is_valid_move(board, from, to) && !would_leave_king_in_check(board, from, to)
}

/// Every legal destination of the piece on `from`
pub fn legal_destinations(board: &mut BoardState, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal_move(board, from, to))
        .collect()
}
