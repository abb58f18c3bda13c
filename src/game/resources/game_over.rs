//! Game outcome tracking
//!
//! Starts as `InProgress` and moves to a terminal state when the side to move
//! has no legal reply.
//!
//! # State Transitions
//!
//! ```text
//! InProgress → Checkmate { winner } / Stalemate
//! ```
//!
//! Both terminal states are final: the game refuses further moves.
//!
//! ## Checkmate
//! The side to move is in check and has no legal moves; the other side wins.
//!
//! ## Stalemate
//! The side to move has no legal moves but is NOT in check. Drawn regardless
//! of material.

use serde::{Deserialize, Serialize};

use crate::game::types::PieceColor;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves are still being played
    #[default]
    InProgress,

    /// The loser's king is attacked and cannot escape
    Checkmate { winner: PieceColor },

    /// No legal moves, king not attacked
    Stalemate,
}

impl GameOutcome {
    /// Check if the game has ended
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Winner of the game, `None` for a draw or a game still being played
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOutcome::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Stalemate)
    }

    /// Human-readable description for result banners
    pub fn message(&self) -> &'static str {
        match self {
            GameOutcome::InProgress => "Game in progress",
            GameOutcome::Checkmate {
                winner: PieceColor::White,
            } => "Checkmate! White wins!",
            GameOutcome::Checkmate {
                winner: PieceColor::Black,
            } => "Checkmate! Black wins!",
            GameOutcome::Stalemate => "Stalemate! The game is a draw.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_in_progress() {
        //! A fresh outcome must not block play
        let outcome = GameOutcome::default();
        assert!(!outcome.is_game_over());
        assert_eq!(outcome.winner(), None);
        assert_eq!(outcome.message(), "Game in progress");
    }

    #[test]
    fn test_checkmate_has_winner() {
        let outcome = GameOutcome::Checkmate {
            winner: PieceColor::Black,
        };
        assert!(outcome.is_game_over());
        assert!(!outcome.is_draw());
        assert_eq!(outcome.winner(), Some(PieceColor::Black));
        assert_eq!(outcome.message(), "Checkmate! Black wins!");
    }

    #[test]
    fn test_stalemate_is_draw_without_winner() {
        let outcome = GameOutcome::Stalemate;
        assert!(outcome.is_game_over());
        assert!(outcome.is_draw());
        assert_eq!(outcome.winner(), None);
    }
}
