//! Turn tracking
//!
//! Manages whose turn it is, the move counter, and the phase of the current
//! turn. The phase is what makes promotion a blocking sub-state: a turn that
//! put a pawn on the last rank stays open until the promotion is resolved.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays → switch() → Black plays → switch() → Move 2: White plays
//! ```
//!
//! # Phase Transitions
//!
//! ```text
//! AwaitingMove ──pawn reaches last rank──▶ AwaitingPromotion
//! AwaitingPromotion ──piece chosen──▶ AwaitingMove | GameOver
//! AwaitingMove ──no legal reply──▶ GameOver
//! ```

use tracing::error;

use super::promotion::PendingPromotion;
use crate::game::types::PieceColor;

/// Tracks whose turn it currently is and the current move number
///
/// Move numbers follow standard chess notation and increment after Black
/// completes a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTurn {
    /// The player who should move next
    pub color: PieceColor,
    /// Full-move number, starting at 1
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            color: PieceColor::White,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    /// Hand the move to the other player
    pub fn switch(&mut self) {
        if self.color == PieceColor::Black {
            self.move_number += 1;
        }
        self.color = self.color.opposite();
    }
}

/// Phase of the current turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    /// Waiting for the side to move to submit a move
    #[default]
    AwaitingMove,

    /// A pawn reached the last rank; only a promotion choice is accepted
    AwaitingPromotion(PendingPromotion),

    /// Checkmate or stalemate; terminal
    GameOver,
}

impl TurnPhase {
    /// Check if this phase accepts a move request
    pub fn accepts_moves(&self) -> bool {
        matches!(self, TurnPhase::AwaitingMove)
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        match self {
            TurnPhase::AwaitingPromotion(pending) => Some(*pending),
            _ => None,
        }
    }

    /// Move to `next`, logging any transition the turn protocol does not allow
    ///
    /// Invalid transitions indicate a logic error in the caller; debug builds
    /// panic on them.
    pub fn transition_to(&mut self, next: TurnPhase) {
        let valid = matches!(
            (*self, next),
            (TurnPhase::AwaitingMove, TurnPhase::AwaitingMove)
                | (TurnPhase::AwaitingMove, TurnPhase::AwaitingPromotion(_))
                | (TurnPhase::AwaitingMove, TurnPhase::GameOver)
                | (TurnPhase::AwaitingPromotion(_), TurnPhase::AwaitingMove)
                | (TurnPhase::AwaitingPromotion(_), TurnPhase::GameOver)
        );

        if !valid {
            error!("[TURN_STATE] Invalid turn phase transition: {:?} -> {:?}", self, next);
            debug_assert!(valid, "Invalid turn phase transition: {:?} -> {:?}", self, next);
        }

        *self = next;
    }
}
