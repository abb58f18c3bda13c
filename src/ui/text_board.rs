//! Plain-text board rendering
//!
//! White pieces are uppercase, Black lowercase, empty squares `.`.
//! Rank 8 is printed first, so White sits at the bottom.

use std::fmt::Write;

use crate::game::rules::{BoardSnapshot, SnapshotPiece};
use crate::game::types::{PieceColor, Square};

const FILE_LABELS: &str = "    a b c d e f g h";
const BORDER: &str = "  +-----------------+";

fn piece_char(piece: SnapshotPiece) -> char {
    let letter = piece.piece_type.letter();
    match piece.color {
        PieceColor::White => letter,
        PieceColor::Black => letter.to_ascii_lowercase(),
    }
}

/// Render the snapshot with rank and file labels on every side
pub fn render_board(snapshot: &BoardSnapshot) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(FILE_LABELS);
    out.push('\n');
    out.push_str(BORDER);
    out.push('\n');

    for row in 0..8u8 {
        let rank = 8 - row;
        let _ = write!(out, "{rank} |");
        for col in 0..8u8 {
            let cell = snapshot
                .at(Square::at(row, col))
                .map(piece_char)
                .unwrap_or('.');
            out.push(' ');
            out.push(cell);
        }
        let _ = writeln!(out, " | {rank}");
    }

    out.push_str(BORDER);
    out.push('\n');
    out.push_str(FILE_LABELS);
    out.push('\n');
    out
}

/// Destinations joined for a hint line, e.g. `e3 e4`
pub fn render_squares(squares: &[Square]) -> String {
    squares
        .iter()
        .map(|square| square.to_algebraic())
        .collect::<Vec<_>>()
        .join(" ")
}
