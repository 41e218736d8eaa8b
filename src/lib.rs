//! Super Tic-Tac-Toe rules engine.
//!
//! A 3x3 grid of 3x3 tic-tac-toe boards. A move claims one cell of one
//! local board; the cell's position sends the opponent to the matching
//! local board for their reply. Local boards decide (won or drawn) by
//! the ordinary tic-tac-toe rules, and the decided boards compose into
//! the global result by the same line scan one level up.
//!
//! The crate is the rules core only: no rendering, input handling, or
//! persistence. A presentation layer translates user intent into a
//! [`Move`], calls [`GameEngine::apply_move`], and re-renders from the
//! query surface (or the returned [`EngineSnapshot`]).
//!
//! # Example
//!
//! ```
//! use super_tictactoe::{GameEngine, Move, Player, Position};
//!
//! let mut game = GameEngine::new(Player::X);
//!
//! // X claims the center cell of the center board; O is sent to the
//! // center board for the reply.
//! let snapshot = game.apply_move(Move::new(Position::Center, Position::Center))?;
//! assert_eq!(snapshot.active_player, Player::O);
//! # Ok::<(), super_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod global;
mod local;
mod position;
mod rules;
mod snapshot;
mod types;

pub mod invariants;

pub use action::{Move, MoveError};
pub use engine::{Constraint, GameEngine};
pub use global::GlobalBoard;
pub use local::LocalBoard;
pub use position::Position;
pub use rules::{LINES, Slot, evaluate};
pub use snapshot::EngineSnapshot;
pub use types::{Cell, Outcome, Player};
