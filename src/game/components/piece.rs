//! Piece model
//!
//! A piece is plain data: identity (color and kind) plus the flags the rules
//! consult. It carries no position of its own; the board cell holding it is
//! its position.

use serde::{Deserialize, Serialize};

use crate::game::types::{PieceColor, PieceType};

/// A single chess piece stored by value in a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
    /// Set once the piece has left its starting square (castling, pawn double step)
    pub has_moved: bool,
    /// Set when the piece is taken out of play
    pub captured: bool,
    /// Pawn only: advanced two squares on the previous ply (en passant victim)
    pub advanced_two_last_turn: bool,
}

impl Piece {
    /// A fresh, unmoved piece
    pub const fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Self {
            color,
            piece_type,
            has_moved: false,
            captured: false,
            advanced_two_last_turn: false,
        }
    }

    /// Same piece flagged as already moved
    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    pub fn is(&self, color: PieceColor, piece_type: PieceType) -> bool {
        self.color == color && self.piece_type == piece_type
    }

    /// Whether this is a pawn whose en passant window is open
    pub fn is_en_passant_target(&self) -> bool {
        self.piece_type == PieceType::Pawn && self.advanced_two_last_turn
    }

    /// Letter for text boards: uppercase for White, lowercase for Black
    pub fn symbol(&self) -> char {
        let letter = self.piece_type.letter();
        match self.color {
            PieceColor::White => letter,
            PieceColor::Black => letter.to_ascii_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_flags_clear() {
        let pawn = Piece::new(PieceColor::White, PieceType::Pawn);
        assert!(!pawn.has_moved);
        assert!(!pawn.captured);
        assert!(!pawn.advanced_two_last_turn);
        assert!(pawn.moved().has_moved);
    }

    #[test]
    fn test_symbol_case_follows_color() {
        assert_eq!(Piece::new(PieceColor::White, PieceType::Knight).symbol(), 'N');
        assert_eq!(Piece::new(PieceColor::Black, PieceType::Queen).symbol(), 'q');
    }

    #[test]
    fn test_en_passant_target_requires_pawn() {
        let mut rook = Piece::new(PieceColor::Black, PieceType::Rook);
        rook.advanced_two_last_turn = true;
        assert!(!rook.is_en_passant_target());

        let mut pawn = Piece::new(PieceColor::Black, PieceType::Pawn);
        pawn.advanced_two_last_turn = true;
        assert!(pawn.is_en_passant_target());
    }
}
