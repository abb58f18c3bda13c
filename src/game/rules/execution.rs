//! Move executor
//!
//! Applies a move that has already passed [`super::validation::validate_move`].
//! Turn switching and end-of-game detection belong to the caller; the executor
//! only changes the board and reports what happened.

use tracing::info;

use super::board_state::BoardState;
use super::piece_moves::{
    castling_rook_squares, en_passant_victim_square, is_castling_move, is_en_passant_move,
};
use crate::game::resources::{is_promotion_move, CastlingRook, MoveDetails};
use crate::game::types::{PieceColor, PieceType, Square};

/// Apply the validated move `from` -> `to` and describe it
///
/// # Panics
///
/// Panics if `from` is empty; validation guarantees a piece is there.
pub fn execute_move(board: &mut BoardState, from: Square, to: Square) -> MoveDetails {
    let piece = board
        .piece_at(from)
        .copied()
        .unwrap_or_else(|| panic!("execute_move called with empty source square {from}"));
    let mut details = MoveDetails::new(&piece, from, to);

    if is_castling_move(&piece, from, to) {
        details.castling = Some(perform_castling(board, from, to));
        info!("[RULES] {:?} castles {} -> {}", piece.color, from, to);
        return details;
    }

    // Resolve the capture before the mover lands
    let victim_square = if piece.piece_type == PieceType::Pawn && is_en_passant_move(board, from, to) {
        details.en_passant = true;
        en_passant_victim_square(from, to)
    } else {
        to
    };
    if let Some(mut victim) = board.take(victim_square) {
        victim.captured = true;
        details.captured = Some(victim);
        info!(
            "[RULES] {:?} {} captures {:?} {} on {}{}",
            piece.color,
            piece.piece_type,
            victim.color,
            victim.piece_type,
            victim_square,
            if details.en_passant { " en passant" } else { "" }
        );
    }

    board.relocate(from, to);
    if let Some(mover) = board.piece_at_mut(to) {
        mover.has_moved = true;
        if mover.piece_type == PieceType::Pawn {
            mover.advanced_two_last_turn = from.delta_to(to).0.abs() == 2;
        }
    }

    if is_promotion_move(piece.piece_type, piece.color, to.row()) {
        details.promotion_square = Some(to);
        info!("[PROMOTION] {:?} pawn reached {}, promotion pending", piece.color, to);
    }

    details
}

/// Clear the double-advance flag on every pawn of `color`
///
/// Called with the opponent of the side that just completed its turn: their
/// en passant window lasted exactly one ply.
pub fn clear_en_passant_flags(board: &mut BoardState, color: PieceColor) {
    for square in Square::all() {
        if let Some(piece) = board.piece_at_mut(square) {
            if piece.color == color && piece.piece_type == PieceType::Pawn {
                piece.advanced_two_last_turn = false;
            }
        }
    }
}

/// Move king and rook together and mark both as moved
fn perform_castling(board: &mut BoardState, king_from: Square, king_to: Square) -> CastlingRook {
    let (rook_from, rook_to) = castling_rook_squares(king_from, king_to);

    for (from, to) in [(king_from, king_to), (rook_from, rook_to)] {
        board.relocate(from, to);
        if let Some(piece) = board.piece_at_mut(to) {
            piece.has_moved = true;
        }
    }

    CastlingRook {
        from: rook_from,
        to: rook_to,
    }
}
