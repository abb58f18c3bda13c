//! In-game status text
//!
//! Everything the terminal shows around the board: turn indicator, check
//! warning, captured pieces with material score, the last move and the result
//! banner once the game ends.

use crate::game::resources::{CapturedPieces, MoveDetails};
use crate::game::types::PieceColor;
use crate::game::ChessGame;

/// Shown while a pawn waits on the last rank
pub const PROMOTION_PROMPT: &str =
    "Pawn promotion! Choose a piece: 1 - Queen, 2 - Rook, 3 - Bishop, 4 - Knight";

pub const HELP_TEXT: &str = "\
Commands:
  e2e4 | e2 e4 | e2-e4   move a piece
  1-4 | q r b n          choose a promotion piece
  moves e2               list legal destinations of a piece
  board                  redraw the board
  help                   show this text
  quit                   leave the game";

/// Turn indicator, e.g. `Move 3 - Black to move`
pub fn turn_line(game: &ChessGame) -> String {
    format!("Move {} - {} to move", game.move_number(), game.side_to_move())
}

/// Warning for the side to move, if its king is attacked
pub fn check_warning(game: &ChessGame) -> Option<String> {
    let side = game.side_to_move();
    (!game.is_game_over() && game.is_king_in_check(side)).then(|| format!("{side} is in check!"))
}

fn captured_side(captured: &CapturedPieces, capturer: PieceColor) -> String {
    let symbols: String = captured
        .taken_by(capturer)
        .iter()
        .map(|piece| piece.symbol())
        .collect();
    let symbols = if symbols.is_empty() { "-".to_string() } else { symbols };
    format!("{capturer}: {symbols} (+{})", captured.score(capturer))
}

/// Captured pieces of both sides with their material score
pub fn captured_line(captured: &CapturedPieces) -> String {
    format!(
        "Captured - {} | {}",
        captured_side(captured, PieceColor::White),
        captured_side(captured, PieceColor::Black)
    )
}

/// One-line summary of a move, e.g. `White Pawn e5xd6 (en passant)`
pub fn move_line(details: &MoveDetails) -> String {
    let separator = if details.is_capture() { 'x' } else { '-' };
    let mut line = format!(
        "{} {} {}{}{}",
        details.color, details.piece_type, details.from, separator, details.to
    );

    if let Some(victim) = details.captured {
        line.push_str(&format!(", takes {}", victim.piece_type));
    }
    if details.en_passant {
        line.push_str(" (en passant)");
    }
    if details.is_castling() {
        line.push_str(" (castles)");
    }
    if let Some(kind) = details.promoted_to {
        line.push_str(&format!(", promotes to {kind}"));
    }
    line
}

/// Status block printed under the board
pub fn status_lines(game: &ChessGame) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);

    if let Some(details) = game.last_move() {
        lines.push(format!("Last move: {}", move_line(details)));
    }
    lines.push(captured_line(game.captured()));

    if game.is_game_over() {
        lines.push(game.outcome().message().to_string());
    } else {
        lines.push(turn_line(game));
        lines.extend(check_warning(game));
    }
    lines
}
