//! Type definitions and utilities for chess game logic
//!
//! Provides the closed set of piece colors and kinds plus the `Square`
//! coordinate newtype shared by every rules module.
//!
//! # Coordinates
//!
//! Squares are addressed by `(row, col)`:
//! - row 0 is rank 8 (Black's back rank), row 7 is rank 1 (White's back rank)
//! - col 0 is file 'a', col 7 is file 'h'
//!
//! White pawns therefore advance towards row 0 and Black pawns towards row 7.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::error::SquareParseError;

/// Side a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other side
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta of a single pawn step for this color
    pub const fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Row holding this color's king and rooks at game start
    pub const fn back_row(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }

    /// Row a pawn of this color promotes on
    pub const fn promotion_row(self) -> u8 {
        self.opposite().back_row()
    }

    /// Row holding this color's pawns at game start
    pub const fn pawn_row(self) -> u8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => f.write_str("White"),
            PieceColor::Black => f.write_str("Black"),
        }
    }
}

/// Kind of a chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Kinds a pawn may promote to, in the order the promotion prompt lists them
    pub const PROMOTION_CHOICES: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    /// Whether a pawn may be replaced by this kind
    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTION_CHOICES.contains(&self)
    }

    /// Material value in pawns (king is never captured, so it counts as zero)
    pub const fn material_value(self) -> u32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }

    /// Uppercase letter used in algebraic notation (`P` for pawns)
    pub const fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Parse a piece letter, case-insensitive
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Board square addressed by row and column
///
/// Always in range: the only ways to build one are [`Square::new`], which
/// returns `None` off the board, and [`Square::at`], which treats an
/// out-of-range coordinate as a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, or `None` when either coordinate is off the board
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Create a square from coordinates known to be on the board
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more.
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates must be in range 0-7");
        Square { row, col }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Square displaced by `(d_row, d_col)`, or `None` off the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Signed `(d_row, d_col)` displacement from `self` to `other`
    pub fn delta_to(self, other: Square) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// All 64 squares, row-major from a8 to h1
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    /// File letter ('a'..='h')
    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank number (1-8)
    pub fn rank_number(self) -> u8 {
        8 - self.row
    }

    /// Parse algebraic notation such as `"e4"`
    ///
    /// # Examples
    ///
    /// ```
    /// use democracy_chess::game::types::Square;
    ///
    /// let e4 = Square::from_algebraic("e4").unwrap();
    /// assert_eq!((e4.row(), e4.col()), (4, 4));
    /// ```
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?.to_digit(10)? as u8;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !(1..=8).contains(&rank) {
            return None;
        }
        Square::new(8 - rank, file as u8 - b'a')
    }

    /// Algebraic notation such as `"e4"`
    pub fn to_algebraic(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Square::from_algebraic(&trimmed.to_ascii_lowercase()).ok_or_else(|| {
            SquareParseError::InvalidAlgebraic {
                input: trimmed.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_algebraic() {
        let e2 = Square::from_algebraic("e2").unwrap();
        assert_eq!((e2.row(), e2.col()), (6, 4));
        assert_eq!(e2.to_algebraic(), "e2");

        let a8 = Square::from_algebraic("a8").unwrap();
        assert_eq!((a8.row(), a8.col()), (0, 0));

        let h1: Square = "H1".parse().unwrap();
        assert_eq!((h1.row(), h1.col()), (7, 7));
    }

    #[test]
    fn test_square_rejects_bad_input() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("a0").is_none());
        assert!(Square::from_algebraic("e22").is_none());
        assert!("".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_offset_stays_on_board() {
        let a8 = Square::at(0, 0);
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(1, 2), Some(Square::at(1, 2)));
        assert_eq!(Square::at(7, 7).offset(0, 1), None);
    }

    #[test]
    #[should_panic(expected = "square coordinates must be in range 0-7")]
    fn test_square_at_out_of_range_panics() {
        let _ = Square::at(8, 0);
    }

    #[test]
    fn test_all_squares() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::at(0, 0));
        assert_eq!(squares[63], Square::at(7, 7));
    }

    #[test]
    fn test_color_geometry() {
        assert_eq!(PieceColor::White.pawn_direction(), -1);
        assert_eq!(PieceColor::Black.pawn_direction(), 1);
        assert_eq!(PieceColor::White.promotion_row(), 0);
        assert_eq!(PieceColor::Black.promotion_row(), 7);
        assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
    }

    #[test]
    fn test_promotion_choices() {
        assert!(PieceType::Queen.is_promotion_choice());
        assert!(PieceType::Knight.is_promotion_choice());
        assert!(!PieceType::King.is_promotion_choice());
        assert!(!PieceType::Pawn.is_promotion_choice());
    }

    #[test]
    fn test_material_values() {
        assert_eq!(PieceType::Pawn.material_value(), 1);
        assert_eq!(PieceType::Bishop.material_value(), 3);
        assert_eq!(PieceType::Queen.material_value(), 9);
        assert_eq!(PieceType::King.material_value(), 0);
    }
}
