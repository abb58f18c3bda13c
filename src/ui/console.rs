//! Line-based console driving a [`ChessGame`]
//!
//! Generic over the reader and writer so the binary plugs in stdin/stdout and
//! tests plug in byte buffers.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::core::CoreResult;
use crate::game::resources::GameOutcome;
use crate::game::types::Square;
use crate::game::{ChessGame, MoveResult};
use crate::input::{parse_command, Command};
use crate::ui::game_ui::{status_lines, HELP_TEXT, PROMOTION_PROMPT};
use crate::ui::text_board::{render_board, render_squares};

/// Console presentation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Print a JSON snapshot instead of the text board
    pub json: bool,
}

/// How a console session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleExit {
    Quit,
    GameOver(GameOutcome),
    EndOfInput,
}

/// A game wired to an input and an output stream
pub struct Console<R, W> {
    game: ChessGame,
    input: R,
    output: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(game: ChessGame, input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            game,
            input,
            output,
            options,
        }
    }

    pub fn game(&self) -> &ChessGame {
        &self.game
    }

    /// Consume the console, handing back the game and the output stream
    pub fn into_parts(self) -> (ChessGame, W) {
        (self.game, self.output)
    }

    /// Read commands until the game ends, the player quits or input runs dry
    pub fn run(&mut self) -> CoreResult<ConsoleExit> {
        writeln!(self.output, "Democracy Chess - type 'help' for commands.")?;
        self.show_position()?;
        if self.game.is_game_over() {
            return Ok(ConsoleExit::GameOver(self.game.outcome()));
        }

        let mut line = String::new();
        loop {
            self.prompt()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                info!("[GAME] Input closed, leaving console");
                return Ok(ConsoleExit::EndOfInput);
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(err) => {
                    debug!("[GAME] Unparsed input {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            match command {
                Command::Quit => return Ok(ConsoleExit::Quit),
                Command::Help => writeln!(self.output, "{HELP_TEXT}")?,
                Command::Board => self.show_position()?,
                Command::Hints(square) => self.show_hints(square)?,
                Command::Move { from, to } => {
                    let result = self.game.submit_move(from, to);
                    self.report(result)?;
                }
                Command::Promote(kind) => {
                    let result = self.game.resolve_pending_promotion(kind);
                    self.report(result)?;
                }
            }

            if self.game.is_game_over() {
                return Ok(ConsoleExit::GameOver(self.game.outcome()));
            }
        }
    }

    fn prompt(&mut self) -> CoreResult<()> {
        if self.game.pending_promotion().is_some() {
            writeln!(self.output, "{PROMOTION_PROMPT}")?;
        }
        write!(self.output, "{}> ", self.game.side_to_move())?;
        self.output.flush()?;
        Ok(())
    }

    fn report(&mut self, result: MoveResult) -> CoreResult<()> {
        match result {
            Ok(_) => self.show_position(),
            Err(err) => {
                writeln!(self.output, "{err}")?;
                Ok(())
            }
        }
    }

    fn show_hints(&mut self, square: Square) -> CoreResult<()> {
        let destinations = self.game.legal_moves_from(square);
        if destinations.is_empty() {
            writeln!(self.output, "No legal moves from {square}.")?;
        } else {
            writeln!(
                self.output,
                "Legal moves from {square}: {}",
                render_squares(&destinations)
            )?;
        }
        Ok(())
    }

    fn show_position(&mut self) -> CoreResult<()> {
        let snapshot = self.game.snapshot();
        if self.options.json {
            serde_json::to_writer(&mut self.output, &snapshot)?;
            writeln!(self.output)?;
        } else {
            write!(self.output, "{}", render_board(&snapshot))?;
        }
        for line in status_lines(&self.game) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}
