//! Metadata of the most recently executed move
//!
//! Front ends read this after every successful request to pick feedback cues
//! (capture sound, castle animation, promotion prompt). The game keeps exactly
//! one record; the next move overwrites it.

use serde::{Deserialize, Serialize};

use crate::game::components::Piece;
use crate::game::types::{PieceColor, PieceType, Square};

/// Rook leg of a castling move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRook {
    pub from: Square,
    pub to: Square,
}

/// What a single move did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDetails {
    pub color: PieceColor,
    pub piece_type: PieceType,
    pub from: Square,
    pub to: Square,
    /// Piece removed from play by this move
    pub captured: Option<Piece>,
    pub en_passant: bool,
    /// Set when the move was a castle
    pub castling: Option<CastlingRook>,
    /// Square of a pawn that reached the last rank
    pub promotion_square: Option<Square>,
    /// Kind chosen once the promotion has been resolved
    pub promoted_to: Option<PieceType>,
}

impl MoveDetails {
    /// A quiet move with nothing special recorded yet
    pub fn new(piece: &Piece, from: Square, to: Square) -> Self {
        Self {
            color: piece.color,
            piece_type: piece.piece_type,
            from,
            to,
            captured: None,
            en_passant: false,
            castling: None,
            promotion_square: None,
            promoted_to: None,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_castling(&self) -> bool {
        self.castling.is_some()
    }

    /// Whether the move is waiting for a promotion choice
    pub fn is_promotion_pending(&self) -> bool {
        self.promotion_square.is_some() && self.promoted_to.is_none()
    }
}
