//! Captured pieces tracking
//!
//! Keeps the record of every piece taken out of play, per capturing side, and
//! derives the material tally shown next to the board.
//!
//! # Material Values
//!
//! Standard chess piece values in pawns:
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: If White captured (Rook=5, Pawn=1) and Black captured (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns.

use serde::{Deserialize, Serialize};

use crate::game::components::Piece;
use crate::game::types::PieceColor;

/// Captured piece records for both sides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// Black pieces taken by White
    pub white_captured: Vec<Piece>,
    /// White pieces taken by Black
    pub black_captured: Vec<Piece>,
}

impl CapturedPieces {
    /// Record a captured piece; the opposite color gets the credit
    pub fn add_capture(&mut self, piece: Piece) {
        match piece.color {
            PieceColor::White => self.black_captured.push(piece),
            PieceColor::Black => self.white_captured.push(piece),
        }
    }

    /// Pieces taken by `capturer`
    pub fn taken_by(&self, capturer: PieceColor) -> &[Piece] {
        match capturer {
            PieceColor::White => &self.white_captured,
            PieceColor::Black => &self.black_captured,
        }
    }

    /// Material won by `capturer`, in pawns
    pub fn score(&self, capturer: PieceColor) -> u32 {
        self.taken_by(capturer)
            .iter()
            .map(|piece| piece.piece_type.material_value())
            .sum()
    }

    /// White's score minus Black's score
    pub fn material_advantage(&self) -> i32 {
        self.score(PieceColor::White) as i32 - self.score(PieceColor::Black) as i32
    }
}
