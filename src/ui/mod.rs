//! UI module - terminal presentation of a game
//!
//! - **text_board**: Text rendering of a board snapshot
//! - **game_ui**: Turn indicator, check warning, captured pieces, result banner
//! - **console**: Read-eval-print loop that feeds commands to a `ChessGame`

pub mod console;
pub mod game_ui;
pub mod text_board;

// Re-export commonly used items
pub use console::{Console, ConsoleExit, ConsoleOptions};
pub use game_ui::{status_lines, PROMOTION_PROMPT};
pub use text_board::render_board;
