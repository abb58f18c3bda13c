//! Chess piece movement rules
//!
//! Pseudo-legal geometry for each piece kind, plus the attack patterns used by
//! the check detector. Pure functions over a [`BoardState`]; nothing here
//! mutates the board or looks at whose turn it is.
//!
//! A move is *pseudo-legal* when the piece's geometry allows it. Whether it
//! leaves the mover's own king in check is decided separately by
//! [`super::attack::would_leave_king_in_check`].

use super::attack::{is_king_in_check, is_square_under_attack};
use super::board_state::BoardState;
use crate::game::components::Piece;
use crate::game::types::{PieceColor, PieceType, Square};

/// Check if the piece on `from` may geometrically move to `to`
///
/// Returns `false` for an empty `from` and for zero-length moves. Does not
/// reject same-color destinations for pieces other than pawns; that is the
/// friendly-fire check in [`super::validation::validate_move`].
pub fn is_valid_move(board: &BoardState, from: Square, to: Square) -> bool {
    // Can't move to the same square
    if from == to {
        return false;
    }

    let Some(piece) = board.piece_at(from).copied() else {
        return false;
    };

    match piece.piece_type {
        PieceType::Pawn => is_valid_pawn_move(board, &piece, from, to),
        PieceType::Knight => is_knight_jump(from, to),
        PieceType::Bishop => is_valid_bishop_move(board, from, to),
        PieceType::Rook => is_valid_rook_move(board, from, to),
        PieceType::Queen => is_valid_queen_move(board, from, to),
        PieceType::King => is_valid_king_move(board, &piece, from, to),
    }
}

/// Check if `piece` standing on `from` attacks `target`
///
/// Identical to the move geometry except that pawns attack only diagonally
/// forward and kings only the adjacent squares (castling never attacks).
pub fn can_attack_square(board: &BoardState, piece: &Piece, from: Square, target: Square) -> bool {
    if from == target {
        return false;
    }

    let (d_row, d_col) = from.delta_to(target);
    match piece.piece_type {
        PieceType::Pawn => d_row == piece.color.pawn_direction() && d_col.abs() == 1,
        PieceType::Knight => is_knight_jump(from, target),
        PieceType::Bishop => is_valid_bishop_move(board, from, target),
        PieceType::Rook => is_valid_rook_move(board, from, target),
        PieceType::Queen => is_valid_queen_move(board, from, target),
        PieceType::King => d_row.abs() <= 1 && d_col.abs() <= 1,
    }
}

/// Get all pseudo-legal destinations of the piece on `from`
pub fn get_possible_moves(board: &BoardState, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_valid_move(board, from, to))
        .collect()
}

/// Whether moving the pawn on `from` to `to` is an en passant capture
///
/// True when the step is one square diagonally forward into an empty square
/// and the square beside the pawn, in the destination's column, holds an
/// enemy pawn that advanced two squares on the previous ply.
pub fn is_en_passant_move(board: &BoardState, from: Square, to: Square) -> bool {
    let Some(pawn) = board.piece_at(from) else {
        return false;
    };
    if pawn.piece_type != PieceType::Pawn {
        return false;
    }

    let (d_row, d_col) = from.delta_to(to);
    if d_row != pawn.color.pawn_direction() || d_col.abs() != 1 || !board.is_empty(to) {
        return false;
    }

    board
        .piece_at(en_passant_victim_square(from, to))
        .is_some_and(|victim| victim.color != pawn.color && victim.is_en_passant_target())
}

/// Square of the pawn removed by an en passant capture from `from` to `to`
pub fn en_passant_victim_square(from: Square, to: Square) -> Square {
    Square::at(from.row(), to.col())
}

/// Whether a king move from `from` to `to` is a castling attempt
pub fn is_castling_move(piece: &Piece, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    piece.piece_type == PieceType::King && d_row == 0 && d_col.abs() == 2
}

/// Rook squares `(from, to)` for a castling king move from `from` to `to`
pub fn castling_rook_squares(from: Square, to: Square) -> (Square, Square) {
    let direction = from.delta_to(to).1.signum();
    let rook_col = if direction > 0 { 7 } else { 0 };
    let rook_target = (to.col() as i8 - direction) as u8;
    (Square::at(from.row(), rook_col), Square::at(from.row(), rook_target))
}

fn is_valid_pawn_move(board: &BoardState, pawn: &Piece, from: Square, to: Square) -> bool {
    let direction = pawn.color.pawn_direction();
    let (d_row, d_col) = from.delta_to(to);

    // Forward moves never capture
    if d_col == 0 {
        if !board.is_empty(to) {
            return false;
        }
        if d_row == direction {
            return true;
        }
        if d_row == 2 * direction && !pawn.has_moved && from.row() == pawn.color.pawn_row() {
            return from
                .offset(direction, 0)
                .is_some_and(|intermediate| board.is_empty(intermediate));
        }
        return false;
    }

    // Capture diagonally
    if d_col.abs() == 1 && d_row == direction {
        return match board.get_piece_color(to) {
            Some(target_color) => target_color != pawn.color,
            None => is_en_passant_move(board, from, to),
        };
    }

    false
}

fn is_knight_jump(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}

fn is_valid_bishop_move(board: &BoardState, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);

    // Must move diagonally
    if d_row == 0 || d_row.abs() != d_col.abs() {
        return false;
    }

    board.is_path_clear(from, to)
}

fn is_valid_rook_move(board: &BoardState, from: Square, to: Square) -> bool {
    // Must move horizontally or vertically
    if from == to || (from.row() != to.row() && from.col() != to.col()) {
        return false;
    }

    board.is_path_clear(from, to)
}

fn is_valid_queen_move(board: &BoardState, from: Square, to: Square) -> bool {
    // Queen moves like rook or bishop
    is_valid_rook_move(board, from, to) || is_valid_bishop_move(board, from, to)
}

fn is_valid_king_move(board: &BoardState, king: &Piece, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);

    // One square in any direction, onto a square the opponent does not cover
    if d_row.abs() <= 1 && d_col.abs() <= 1 {
        return !is_square_under_attack(board, to, king.color);
    }

    // Castling starts from the king's home square on its back rank
    if is_castling_move(king, from, to) && !king.has_moved && from == Square::at(king.color.back_row(), 4) {
        return can_castle(board, king.color, from, to);
    }

    false
}

/// Castling preconditions for the king of `color` moving from `from` to `to`
///
/// The king must not be in check, the corner rook must be an unmoved rook of
/// the same color, the squares between king and rook must be empty, and no
/// square the king stands on or crosses (destination included) may be attacked.
fn can_castle(board: &BoardState, color: PieceColor, from: Square, to: Square) -> bool {
    if is_king_in_check(board, color) {
        return false;
    }

    let (rook_square, _) = castling_rook_squares(from, to);
    let rook_ready = board
        .piece_at(rook_square)
        .is_some_and(|rook| rook.is(color, PieceType::Rook) && !rook.has_moved);
    if !rook_ready || !board.is_path_clear(from, rook_square) {
        return false;
    }

    let direction = from.delta_to(to).1.signum();
    let mut transit = from;
    loop {
        if is_square_under_attack(board, transit, color) {
            return false;
        }
        if transit == to {
            return true;
        }
        transit = match transit.offset(0, direction) {
            Some(next) => next,
            None => return false,
        };
    }
}
