use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use democracy_chess::core::init_tracing;
use democracy_chess::ui::{Console, ConsoleExit, ConsoleOptions};
use democracy_chess::ChessGame;

/// Two-player chess on the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print a JSON board snapshot instead of the text board
    #[arg(long)]
    json: bool,

    /// Tracing filter directives, e.g. `democracy_chess=debug`
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_filter.as_deref());

    let stdin = io::stdin();
    let stdout = BufWriter::new(io::stdout());
    let options = ConsoleOptions { json: args.json };

    let mut console = Console::new(ChessGame::new(), stdin.lock(), stdout, options);
    let exit = console.run().context("console session failed")?;

    match exit {
        ConsoleExit::GameOver(outcome) => info!("[GAME] Finished: {}", outcome.message()),
        ConsoleExit::Quit => info!("[GAME] Player quit"),
        ConsoleExit::EndOfInput => info!("[GAME] Input closed"),
    }
    Ok(())
}
