//! Error types for game module
//!
//! Every way a move request can be refused during normal play is a
//! [`MoveError`] value. These are expected, recoverable outcomes and are
//! reported back to the caller verbatim; their `Display` text is the reason
//! shown to players.
//!
//! Programming errors (an out-of-range coordinate handed to [`Square::at`],
//! for example) are not part of this type.
//!
//! [`Square::at`]: crate::game::types::Square::at

use thiserror::Error;

use crate::game::types::{PieceType, Square};

/// Reasons a move or promotion request is refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The starting square is empty
    #[error("No piece at the selected starting position.")]
    EmptySource,

    /// The piece belongs to the side not on move
    #[error("It's not your turn.")]
    WrongTurn,

    /// The piece cannot reach the destination
    #[error("Invalid move: This move is not permitted for the selected piece.")]
    IllegalGeometry,

    /// The move would leave the mover's own king attacked
    #[error("Invalid move: You cannot leave your king in check!")]
    SelfCheck,

    /// The destination holds a piece of the mover's color
    #[error("Invalid move: Cannot capture your own piece.")]
    FriendlyFire,

    /// A promotion request that cannot be honored
    #[error("Invalid promotion choice: {0}")]
    InvalidPromotionChoice(PromotionRejection),

    /// A pawn is waiting to be promoted; no other move is accepted until then
    #[error("Pawn promotion pending at {square}: choose a piece first.")]
    PromotionPending { square: Square },

    /// Checkmate or stalemate has already been reached
    #[error("The game is over.")]
    GameOver,
}

impl MoveError {
    /// Whether the move was refused only because it exposes the mover's king
    ///
    /// Front ends use this to flash the king instead of a generic "illegal" cue.
    pub fn leaves_king_in_check(&self) -> bool {
        matches!(self, MoveError::SelfCheck)
    }
}

/// Why a promotion request was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionRejection {
    #[error("no promotion is pending")]
    NotPending,

    #[error("a pawn cannot promote to {0}")]
    DisallowedKind(PieceType),
}

/// Failure to read a square from algebraic text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("Invalid square '{input}': expected a file a-h followed by a rank 1-8")]
    InvalidAlgebraic { input: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, MoveError>;
