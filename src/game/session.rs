//! Game session - the public entry point of the engine
//!
//! A [`ChessGame`] owns everything about one game: board, turn, outcome,
//! pending promotion, the last move's metadata and the captured tally. There is
//! no global state, so any number of games can live side by side.
//!
//! Mutating operations take `&mut self`. A caller sharing one game between
//! threads must serialize access (a mutex or an actor per game); separate games
//! need no coordination at all.
//!
//! # Turn protocol
//!
//! 1. [`ChessGame::submit_move`] checks that the game accepts moves, that the
//!    source square holds a piece of the side to move, then validates and
//!    executes the move.
//! 2. If a pawn reached the last rank the turn pauses in
//!    [`TurnPhase::AwaitingPromotion`] until
//!    [`ChessGame::resolve_pending_promotion`] supplies the new piece.
//! 3. Otherwise the opponent's en passant flags are cleared, the turn switches
//!    and the status evaluator decides whether the game goes on.

use tracing::{debug, info};

use crate::game::components::Piece;
use crate::game::error::{GameResult, MoveError, PromotionRejection};
use crate::game::resources::{
    CapturedPieces, CurrentTurn, GameOutcome, MoveDetails, PendingPromotion, TurnPhase,
};
use crate::game::rules::{
    clear_en_passant_flags, evaluate_status, execute_move, is_king_in_check, legal_destinations,
    validate_move, BoardSnapshot, BoardState,
};
use crate::game::types::{PieceColor, PieceType, Square};

/// Result of a move or promotion request
pub type MoveResult = GameResult<MoveDetails>;

/// One game of chess
#[derive(Debug, Clone)]
pub struct ChessGame {
    board: BoardState,
    turn: CurrentTurn,
    phase: TurnPhase,
    outcome: GameOutcome,
    last_move: Option<MoveDetails>,
    captured: CapturedPieces,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        Self {
            board: BoardState::standard(),
            turn: CurrentTurn::default(),
            phase: TurnPhase::AwaitingMove,
            outcome: GameOutcome::InProgress,
            last_move: None,
            captured: CapturedPieces::default(),
        }
    }

    /// Arbitrary position with `side_to_move` to play
    ///
    /// The position is classified immediately, so a board that is already
    /// checkmate or stalemate yields a finished game.
    pub fn from_board(board: BoardState, side_to_move: PieceColor) -> Self {
        let mut game = Self {
            board,
            turn: CurrentTurn {
                color: side_to_move,
                move_number: 1,
            },
            ..Self::new()
        };
        game.update_status();
        game
    }

    /// Validate and play `from` -> `to` for the side to move
    pub fn submit_move(&mut self, from: Square, to: Square) -> MoveResult {
        match self.phase {
            TurnPhase::GameOver => return Err(MoveError::GameOver),
            TurnPhase::AwaitingPromotion(pending) => {
                return Err(MoveError::PromotionPending {
                    square: pending.square,
                })
            }
            TurnPhase::AwaitingMove => {}
        }

        let piece = self.board.piece_at(from).copied().ok_or(MoveError::EmptySource)?;
        if piece.color != self.turn.color {
            debug!("[GAME] {:?} tried to move on {:?}'s turn", piece.color, self.turn.color);
            return Err(MoveError::WrongTurn);
        }

        validate_move(&mut self.board, from, to)?;

        let details = execute_move(&mut self.board, from, to);
        if let Some(victim) = details.captured {
            self.captured.add_capture(victim);
        }
        self.last_move = Some(details);
        info!("[GAME] {:?} {} {} -> {}", piece.color, piece.piece_type, from, to);

        if let Some(square) = details.promotion_square {
            self.phase.transition_to(TurnPhase::AwaitingPromotion(PendingPromotion {
                square,
                color: piece.color,
            }));
            return Ok(details);
        }

        self.finish_turn();
        Ok(details)
    }

    /// Replace the pawn waiting on the last rank with a `choice` piece
    ///
    /// Valid only while a promotion is pending and for Queen, Rook, Bishop or
    /// Knight. On success the deferred turn switch and status check run.
    pub fn resolve_pending_promotion(&mut self, choice: PieceType) -> MoveResult {
        let Some(pending) = self.phase.pending_promotion() else {
            return Err(MoveError::InvalidPromotionChoice(PromotionRejection::NotPending));
        };
        if !choice.is_promotion_choice() {
            debug!("[PROMOTION] Rejected promotion to {}", choice);
            return Err(MoveError::InvalidPromotionChoice(
                PromotionRejection::DisallowedKind(choice),
            ));
        }

        // The pawn move that opened the promotion is always the last move
        let Some(details) = self.last_move.as_mut() else {
            return Err(MoveError::InvalidPromotionChoice(PromotionRejection::NotPending));
        };
        details.promoted_to = Some(choice);
        let details = *details;

        self.board
            .place(pending.square, Piece::new(pending.color, choice).moved());
        info!("[PROMOTION] {:?} pawn on {} promoted to {}", pending.color, pending.square, choice);

        self.phase.transition_to(TurnPhase::AwaitingMove);
        self.finish_turn();
        Ok(details)
    }

    /// Legal destinations of the piece on `from`
    ///
    /// Empty when the square is empty, holds a piece of the side not to move,
    /// or the game is not waiting for a move.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Square> {
        if !self.phase.accepts_moves() || self.board.get_piece_color(from) != Some(self.turn.color) {
            return Vec::new();
        }
        let mut board = self.board;
        legal_destinations(&mut board, from)
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.turn.color
    }

    pub fn move_number(&self) -> u32 {
        self.turn.move_number
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Winner by checkmate, if any
    pub fn winner(&self) -> Option<PieceColor> {
        self.outcome.winner()
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_game_over()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.phase.pending_promotion()
    }

    pub fn is_king_in_check(&self, color: PieceColor) -> bool {
        is_king_in_check(&self.board, color)
    }

    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.board.find_king(color)
    }

    /// Metadata of the most recent move
    pub fn last_move(&self) -> Option<&MoveDetails> {
        self.last_move.as_ref()
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Close the current turn: expire the opponent's en passant window,
    /// hand over the move and classify the new position
    fn finish_turn(&mut self) {
        let mover = self.turn.color;
        clear_en_passant_flags(&mut self.board, mover.opposite());
        self.turn.switch();
        self.update_status();
    }

    fn update_status(&mut self) {
        let side = self.turn.color;
        self.outcome = evaluate_status(&mut self.board, side);

        match self.outcome {
            GameOutcome::InProgress => {
                if is_king_in_check(&self.board, side) {
                    info!("[GAME] {:?} is in check", side);
                }
            }
            GameOutcome::Checkmate { winner } => {
                info!("[GAME] Checkmate, {:?} wins", winner);
                self.phase.transition_to(TurnPhase::GameOver);
            }
            GameOutcome::Stalemate => {
                info!("[GAME] Stalemate, {:?} has no legal moves", side);
                self.phase.transition_to(TurnPhase::GameOver);
            }
        }
    }
}
