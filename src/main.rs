//! Super Tic-Tac-Toe - terminal harness.
//!
//! A line-oriented driver for the rules engine: reads `<board> <cell>`
//! index pairs from stdin, applies them, and re-renders the grid. This
//! is the "presentation layer" seat; all rules live in the library.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use super_tictactoe::{GameEngine, MoveError, Outcome, Player};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "super_tictactoe", about = "Play Super Tic-Tac-Toe in the terminal")]
struct Cli {
    /// Which player takes the first turn.
    #[arg(long, value_enum, default_value_t = FirstPlayer::X)]
    first_player: FirstPlayer,

    /// Emit a JSON snapshot after every applied move instead of the grid.
    #[arg(long)]
    json: bool,
}

/// Clap-friendly first-player choice.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FirstPlayer {
    /// X moves first.
    X,
    /// O moves first.
    O,
}

impl std::fmt::Display for FirstPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FirstPlayer::X => write!(f, "x"),
            FirstPlayer::O => write!(f, "o"),
        }
    }
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::X => Player::X,
            FirstPlayer::O => Player::O,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let first: Player = cli.first_player.into();
    let mut game = GameEngine::new(first);

    info!(%first, "starting game");
    println!("Super Tic-Tac-Toe. Moves are `<board> <cell>` with indices 0-8,");
    println!("row-major (0 1 2 / 3 4 5 / 6 7 8). `new` restarts, `quit` exits.");
    render(&game, cli.json)?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "q" => break,
            "new" => {
                game.reset(first);
                println!("New game. Player {first} to move.");
                render(&game, cli.json)?;
            }
            _ => match parse_move(input) {
                Some((board, cell)) => {
                    let player = game.current_player();
                    match game.apply_indices(board, cell) {
                        Ok(snapshot) => {
                            if cli.json {
                                println!("{}", serde_json::to_string(&snapshot)?);
                            } else {
                                render(&game, false)?;
                            }
                            match snapshot.result {
                                Outcome::WonBy(winner) => {
                                    println!("Player {winner}, you win!!!");
                                }
                                Outcome::Drawn => println!("This game is a draw!!!"),
                                Outcome::Undecided => {
                                    println!(
                                        "Player {player} played. Player {}, it's your turn (play in {}).",
                                        snapshot.active_player, snapshot.constraint
                                    );
                                }
                            }
                        }
                        Err(err) => report(err),
                    }
                }
                None => println!("Could not read that; enter two indices 0-8, e.g. `4 6`."),
            },
        }
        std::io::stdout().flush()?;
    }

    Ok(())
}

/// Parses a `<board> <cell>` index pair.
fn parse_move(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let board = parts.next()?.parse().ok()?;
    let cell = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((board, cell))
}

/// Explains a rejected move. The engine reports the kind; the wording
/// here is the harness's own.
fn report(err: MoveError) {
    match err {
        MoveError::GameOver => println!("The game is over. `new` starts another."),
        MoveError::IllegalBoard(required) => {
            println!("You were sent to the {required} board; play there.");
        }
        MoveError::BoardClosed(board) => println!("The {board} board is already decided."),
        MoveError::CellTaken { cell, .. } => println!("The {cell} cell is taken."),
        MoveError::IndexOutOfRange(index) => println!("{index} is not an index 0-8."),
    }
}

/// Prints the current grid (unless in JSON mode, which prints per-move).
fn render(game: &GameEngine, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&game.snapshot())?);
    } else {
        println!("{}", game.board().display());
    }
    Ok(())
}
