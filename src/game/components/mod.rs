//! Game data components
//!
//! - `piece` - The piece model stored in board cells

pub mod piece;

pub use piece::Piece;
