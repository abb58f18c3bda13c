//! Board state representation for move validation
//!
//! An 8×8 grid of optional pieces held by value. A piece's position is the
//! cell that holds it, so moving a piece is a single transfer between two
//! cells and there is no stored coordinate to fall out of sync.

use serde::{Deserialize, Serialize};

use crate::game::components::Piece;
use crate::game::types::{PieceColor, PieceType, Square};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The playing grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardState {
    cells: [[Option<Piece>; 8]; 8],
}

impl BoardState {
    /// A board with no pieces
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting layout: White on rows 6-7, Black on rows 0-1
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [PieceColor::White, PieceColor::Black] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.place(Square::at(color.back_row(), col as u8), Piece::new(color, *kind));
                board.place(
                    Square::at(color.pawn_row(), col as u8),
                    Piece::new(color, PieceType::Pawn),
                );
            }
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.cells[square.row() as usize][square.col() as usize].as_ref()
    }

    pub fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.cells[square.row() as usize][square.col() as usize].as_mut()
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn get_piece_color(&self, square: Square) -> Option<PieceColor> {
        self.piece_at(square).map(|piece| piece.color)
    }

    /// Put `piece` on `square`, returning whatever was there
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].replace(piece)
    }

    /// Lift the piece off `square`
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    /// Restore a cell to an exact earlier value
    pub fn set(&mut self, square: Square, cell: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = cell;
    }

    /// Move the piece on `from` to `to`, returning the displaced occupant of `to`
    ///
    /// Does nothing and returns `None` if `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.take(from)?;
        self.place(to, piece)
    }

    /// Whether every square strictly between `from` and `to` is empty
    ///
    /// Callers must only pass pairs on a common row, column or diagonal.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let (d_row, d_col) = from.delta_to(to);
        debug_assert!(
            d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs(),
            "is_path_clear called on a non-linear pair {from} -> {to}"
        );

        let step = (d_row.signum(), d_col.signum());
        let mut current = from;
        loop {
            current = match current.offset(step.0, step.1) {
                Some(next) => next,
                None => return true,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }

    /// Every occupied cell, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Occupied cells of one color
    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.piece_type == PieceType::King)
            .map(|(square, _)| square)
    }

    /// Serializable copy of the grid for collaborators
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut rows = [[None; 8]; 8];
        for (square, piece) in self.pieces() {
            rows[square.row() as usize][square.col() as usize] = Some(SnapshotPiece {
                color: piece.color,
                piece_type: piece.piece_type,
            });
        }
        BoardSnapshot { rows }
    }
}

/// Piece identity as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotPiece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

/// Read-only picture of the board, row 0 first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: [[Option<SnapshotPiece>; 8]; 8],
}

impl BoardSnapshot {
    pub fn at(&self, square: Square) -> Option<SnapshotPiece> {
        self.rows[square.row() as usize][square.col() as usize]
    }
}
