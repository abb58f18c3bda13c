//! Game Flow Integration Tests
//!
//! Full games played through the public `ChessGame` API:
//! - Turn alternation and refusals
//! - Castling, en passant and promotion across turns
//! - Checkmate and stalemate endings

use democracy_chess::game::components::Piece;
use democracy_chess::game::resources::{GameOutcome, PendingPromotion, TurnPhase};
use democracy_chess::game::rules::BoardState;
use democracy_chess::game::PromotionRejection;
use democracy_chess::{ChessGame, MoveError, PieceColor, PieceType, Square};

use PieceColor::{Black, White};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square in test")
}

/// Play `moves` in order, failing the test on the first refusal
fn play(game: &mut ChessGame, moves: &[&str]) {
    for mv in moves {
        let (from, to) = mv.split_at(2);
        game.submit_move(sq(from), sq(to))
            .unwrap_or_else(|err| panic!("{mv} refused: {err}"));
    }
}

fn board_with(pieces: &[(PieceType, PieceColor, &str)]) -> BoardState {
    let mut board = BoardState::empty();
    for &(kind, color, square) in pieces {
        board.place(sq(square), Piece::new(color, kind));
    }
    board
}

// ============================================================================
// Starting Position Tests
// ============================================================================

#[test]
fn test_new_game_setup() {
    let game = ChessGame::new();

    assert_eq!(game.board().pieces_of(White).count(), 16);
    assert_eq!(game.board().pieces_of(Black).count(), 16);
    assert_eq!(game.side_to_move(), White, "White moves first");
    assert_eq!(game.move_number(), 1);
    assert_eq!(game.outcome(), GameOutcome::InProgress);
    assert_eq!(game.phase(), TurnPhase::AwaitingMove);
    assert!(game.last_move().is_none());
}

#[test]
fn test_legal_moves_from_respects_turn() {
    let game = ChessGame::new();

    let mut pawn_moves = game.legal_moves_from(sq("e2"));
    pawn_moves.sort();
    assert_eq!(pawn_moves, vec![sq("e4"), sq("e3")], "rank 4 sorts before rank 3");
    assert!(game.legal_moves_from(sq("e7")).is_empty(), "Black pieces on White's turn");
    assert!(game.legal_moves_from(sq("e4")).is_empty(), "empty square");
}

#[test]
fn test_legal_moves_from_shared_reference() {
    let mut game = ChessGame::new();
    play(&mut game, &["e2e4", "e7e5"]);

    let shared: &ChessGame = &game;
    let before = *shared.board();
    let mut queen_moves = shared.legal_moves_from(sq("d1"));
    queen_moves.sort();
    assert_eq!(
        queen_moves,
        vec![sq("h5"), sq("g4"), sq("f3"), sq("e2")],
        "queen diagonal opened by e4"
    );
    assert_eq!(*shared.board(), before, "hint query leaves the board alone");
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_turn_alternation() {
    let mut game = ChessGame::new();

    play(&mut game, &["e2e4"]);
    assert_eq!(game.side_to_move(), Black);

    let before = *game.board();
    assert_eq!(game.submit_move(sq("d2"), sq("d4")), Err(MoveError::WrongTurn));
    assert_eq!(*game.board(), before, "refused move leaves the board alone");

    play(&mut game, &["e7e5"]);
    assert_eq!(game.side_to_move(), White);
    assert_eq!(game.move_number(), 2, "move number advances after Black");
}

#[test]
fn test_empty_source_refused() {
    let mut game = ChessGame::new();

    assert_eq!(game.submit_move(sq("e3"), sq("e4")), Err(MoveError::EmptySource));
    assert_eq!(game.side_to_move(), White);
}

#[test]
fn test_self_check_refused_and_board_unchanged() {
    let board = board_with(&[
        (PieceType::King, White, "e1"),
        (PieceType::Bishop, White, "e2"),
        (PieceType::Rook, Black, "e8"),
        (PieceType::King, Black, "a8"),
    ]);
    let mut game = ChessGame::from_board(board, White);

    let err = game.submit_move(sq("e2"), sq("d3")).unwrap_err();
    assert_eq!(err, MoveError::SelfCheck);
    assert!(err.leaves_king_in_check());
    assert_eq!(*game.board(), board);
    assert_eq!(game.side_to_move(), White, "turn does not pass on a refusal");
}

// ============================================================================
// Special Move Tests
// ============================================================================

#[test]
fn test_white_king_side_castle() {
    let mut game = ChessGame::new();
    play(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);

    let details = game.submit_move(sq("e1"), sq("g1")).expect("castling is legal");

    assert!(details.is_castling());
    let board = game.board();
    assert!(board.piece_at(sq("g1")).is_some_and(|p| p.is(White, PieceType::King)));
    assert!(board.piece_at(sq("f1")).is_some_and(|p| p.is(White, PieceType::Rook)));
    assert!(board.is_empty(sq("e1")));
    assert!(board.is_empty(sq("h1")));
    assert_eq!(game.side_to_move(), Black);
}

#[test]
fn test_black_en_passant_on_e3() {
    let mut game = ChessGame::new();
    play(&mut game, &["a2a3", "d7d5", "a3a4", "d5d4", "e2e4"]);

    let details = game.submit_move(sq("d4"), sq("e3")).expect("en passant is legal");

    assert!(details.en_passant);
    assert!(game.board().is_empty(sq("e4")), "white pawn removed");
    assert!(game.board().piece_at(sq("e3")).is_some_and(|p| p.is(Black, PieceType::Pawn)));
    assert_eq!(game.captured().taken_by(Black).len(), 1);
    assert_eq!(game.captured().score(Black), 1);
}

#[test]
fn test_en_passant_expires_after_one_ply() {
    let mut game = ChessGame::new();
    play(&mut game, &["a2a3", "d7d5", "a3a4", "d5d4", "e2e4", "h7h6", "h2h3"]);

    assert_eq!(
        game.submit_move(sq("d4"), sq("e3")),
        Err(MoveError::IllegalGeometry)
    );
}

#[test]
fn test_castling_refused_off_back_rank() {
    let board = board_with(&[
        (PieceType::King, White, "e4"),
        (PieceType::Rook, White, "h4"),
        (PieceType::King, Black, "a8"),
    ]);
    let mut game = ChessGame::from_board(board, White);

    assert_eq!(
        game.submit_move(sq("e4"), sq("g4")),
        Err(MoveError::IllegalGeometry)
    );
    assert_eq!(*game.board(), board);
    assert!(!game.legal_moves_from(sq("e4")).contains(&sq("g4")));
}

#[test]
fn test_promotion_locks_turn_until_resolved() {
    let board = board_with(&[
        (PieceType::Pawn, White, "b7"),
        (PieceType::King, White, "e1"),
        (PieceType::King, Black, "h8"),
    ]);
    let mut game = ChessGame::from_board(board, White);

    let details = game.submit_move(sq("b7"), sq("b8")).expect("pawn advance");
    assert!(details.is_promotion_pending());
    assert_eq!(
        game.pending_promotion(),
        Some(PendingPromotion {
            square: sq("b8"),
            color: White
        })
    );
    assert_eq!(game.side_to_move(), White, "turn waits for the choice");

    assert_eq!(
        game.submit_move(sq("e1"), sq("e2")),
        Err(MoveError::PromotionPending { square: sq("b8") })
    );
    assert_eq!(
        game.resolve_pending_promotion(PieceType::King),
        Err(MoveError::InvalidPromotionChoice(
            PromotionRejection::DisallowedKind(PieceType::King)
        ))
    );
    assert!(game.pending_promotion().is_some(), "a refused choice keeps the lock");
    assert_eq!(game.side_to_move(), White, "a refused choice keeps the turn");

    let details = game
        .resolve_pending_promotion(PieceType::Queen)
        .expect("queen is a valid choice");
    assert_eq!(details.promoted_to, Some(PieceType::Queen));
    assert!(game
        .board()
        .piece_at(sq("b8"))
        .is_some_and(|p| p.is(White, PieceType::Queen)));
    assert_eq!(game.side_to_move(), Black);
    assert!(game.is_king_in_check(Black), "new queen checks along the back rank");
    assert_eq!(game.outcome(), GameOutcome::InProgress);
}

#[test]
fn test_promotion_without_pending_pawn() {
    let mut game = ChessGame::new();

    assert_eq!(
        game.resolve_pending_promotion(PieceType::Queen),
        Err(MoveError::InvalidPromotionChoice(PromotionRejection::NotPending))
    );
}

// ============================================================================
// Game End Tests
// ============================================================================

#[test]
fn test_fools_mate() {
    let mut game = ChessGame::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert_eq!(game.outcome(), GameOutcome::Checkmate { winner: Black });
    assert_eq!(game.winner(), Some(Black));
    assert!(game.is_game_over());
    assert_eq!(game.phase(), TurnPhase::GameOver);
    assert_eq!(game.submit_move(sq("e2"), sq("e4")), Err(MoveError::GameOver));
}

#[test]
fn test_stalemate_is_a_draw() {
    let board = board_with(&[
        (PieceType::King, Black, "a8"),
        (PieceType::Queen, White, "d7"),
        (PieceType::King, White, "b6"),
    ]);
    let mut game = ChessGame::from_board(board, White);
    assert_eq!(game.outcome(), GameOutcome::InProgress);

    play(&mut game, &["d7c7"]);

    assert_eq!(game.outcome(), GameOutcome::Stalemate);
    assert!(game.outcome().is_draw());
    assert_eq!(game.winner(), None);
    assert!(!game.is_king_in_check(Black));
}

#[test]
fn test_from_board_already_mated() {
    let board = board_with(&[
        (PieceType::King, Black, "g8"),
        (PieceType::Pawn, Black, "f7"),
        (PieceType::Pawn, Black, "g7"),
        (PieceType::Pawn, Black, "h7"),
        (PieceType::Rook, White, "a8"),
        (PieceType::King, White, "e1"),
    ]);
    let game = ChessGame::from_board(board, Black);

    assert_eq!(game.outcome(), GameOutcome::Checkmate { winner: White });
    assert_eq!(game.phase(), TurnPhase::GameOver);
}
