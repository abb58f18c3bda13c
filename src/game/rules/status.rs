//! Game status evaluator
//!
//! Decides, for the side to move, whether the game goes on. The search is
//! exhaustive over (own piece, destination) pairs but stops at the first legal
//! move; it never ranks moves.

use super::attack::is_king_in_check;
use super::board_state::BoardState;
use super::validation::is_legal_move;
use crate::game::resources::GameOutcome;
use crate::game::types::{PieceColor, Square};

/// Whether `color` has at least one legal move
pub fn has_any_legal_move(board: &mut BoardState, color: PieceColor) -> bool {
    let own_squares: Vec<Square> = board.pieces_of(color).map(|(square, _)| square).collect();

    own_squares
        .into_iter()
        .any(|from| Square::all().any(|to| is_legal_move(board, from, to)))
}

/// Classify the position with `side_to_move` to play
pub fn evaluate_status(board: &mut BoardState, side_to_move: PieceColor) -> GameOutcome {
    if has_any_legal_move(board, side_to_move) {
        return GameOutcome::InProgress;
    }

    if is_king_in_check(board, side_to_move) {
        GameOutcome::Checkmate {
            winner: side_to_move.opposite(),
        }
    } else {
        GameOutcome::Stalemate
    }
}
