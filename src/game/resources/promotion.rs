//! Pawn promotion state
//!
//! When a pawn reaches the far rank the turn pauses: the move is on the board
//! but the side to move does not change until the player picks the new piece.
//! While a promotion is pending the game accepts nothing except that choice.

use serde::{Deserialize, Serialize};

use crate::game::types::{PieceColor, PieceType, Square};

/// A pawn waiting to be replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPromotion {
    /// Where the pawn landed
    pub square: Square,
    /// Color of the pawn being promoted
    pub color: PieceColor,
}

/// Check if a pawn landing on `target_row` must promote
pub fn is_promotion_move(piece_type: PieceType, color: PieceColor, target_row: u8) -> bool {
    piece_type == PieceType::Pawn && target_row == color.promotion_row()
}

/// Map a prompt answer to a piece kind
///
/// Accepts the numbered menu (`1` Queen, `2` Rook, `3` Bishop, `4` Knight)
/// or a piece letter (`q`, `r`, `b`, `n`, either case).
pub fn parse_promotion_choice(input: &str) -> Option<PieceType> {
    let input = input.trim();
    let mut chars = input.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    match c {
        '1'..='4' => Some(PieceType::PROMOTION_CHOICES[c as usize - '1' as usize]),
        _ => PieceType::from_letter(c).filter(|kind| kind.is_promotion_choice()),
    }
}
