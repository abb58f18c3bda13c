//! Attack and check detection
//!
//! `is_square_under_attack` scans every opposing piece's attack pattern.
//! `would_leave_king_in_check` plays a candidate move on the live board,
//! asks whether the mover's king is attacked, and puts every touched cell
//! back exactly as it was before returning. It needs `&mut BoardState`, so no
//! other validation can observe the board while the simulation is in flight.

use super::board_state::BoardState;
use super::piece_moves::{can_attack_square, en_passant_victim_square, is_en_passant_move};
use crate::game::types::{PieceColor, Square};

/// Whether any piece of the opponent of `defending` attacks `square`
pub fn is_square_under_attack(board: &BoardState, square: Square, defending: PieceColor) -> bool {
    board
        .pieces_of(defending.opposite())
        .any(|(from, piece)| can_attack_square(board, piece, from, square))
}

/// Whether the king of `color` is attacked
///
/// A board without that king reports `false`.
pub fn is_king_in_check(board: &BoardState, color: PieceColor) -> bool {
    board
        .find_king(color)
        .is_some_and(|king| is_square_under_attack(board, king, color))
}

/// Whether moving the piece on `from` to `to` would expose its own king
///
/// The capture of whatever sits on `to` (or of the en passant victim) is part
/// of the simulation. Castling rook movement is not simulated; castling
/// legality already requires every square the king crosses to be safe.
/// Returns `false` when `from` is empty.
pub fn would_leave_king_in_check(board: &mut BoardState, from: Square, to: Square) -> bool {
    let Some(mover) = board.piece_at(from).copied() else {
        return false;
    };

    let en_passant_victim =
        is_en_passant_move(board, from, to).then(|| en_passant_victim_square(from, to));

    // Snapshot of every cell the simulation touches
    let saved_target = board.piece_at(to).copied();
    let saved_victim = en_passant_victim.map(|square| (square, board.piece_at(square).copied()));

    if let Some((square, _)) = saved_victim {
        board.take(square);
    }
    board.take(from);
    let mut simulated = mover;
    simulated.has_moved = true;
    simulated.advanced_two_last_turn = false;
    // The displaced occupant is out of play for the duration of the check
    board.place(to, simulated);

    let in_check = is_king_in_check(board, mover.color);

    board.set(to, saved_target);
    board.set(from, Some(mover));
    if let Some((square, cell)) = saved_victim {
        board.set(square, cell);
    }

    in_check
}
