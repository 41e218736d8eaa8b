//! First-class move types for Super Tic-Tac-Toe.
//!
//! A move is the player's intent, not a side effect: it names a local
//! board and a cell within it, and can be validated, logged, and
//! serialized independently of execution.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A move: a cell selection within a local board.
///
/// The acting player is not part of the move; the engine always plays
/// the mark of whoever's turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The local board the move targets.
    pub board: Position,
    /// The cell within that local board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(board: Position, cell: Position) -> Self {
        Self { board, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} board, {} cell", self.board, self.cell)
    }
}

/// Error rejecting a move.
///
/// Every variant is recoverable: the engine reports the kind to the
/// caller and leaves its state untouched, so a presentation layer can
/// ignore the selection or surface feedback. Message text here is
/// diagnostic; user-facing wording is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has a result.
    #[display("game is already over")]
    GameOver,

    /// The move targets a board outside the active constraint.
    #[display("play must be in the {_0} board")]
    IllegalBoard(Position),

    /// The targeted local board is already decided.
    #[display("the {_0} board is closed")]
    BoardClosed(Position),

    /// The targeted cell is already claimed.
    #[display("the {cell} cell of the {board} board is taken")]
    CellTaken {
        /// Board containing the cell.
        board: Position,
        /// The occupied cell.
        cell: Position,
    },

    /// A raw board or cell index was outside 0-8.
    #[display("index {_0} is out of range (must be 0-8)")]
    IndexOutOfRange(usize),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Position::Center, Position::TopLeft);
        assert_eq!(mov.to_string(), "center board, top-left cell");
    }

    #[test]
    fn test_error_messages_name_the_target() {
        assert!(
            MoveError::IllegalBoard(Position::Center)
                .to_string()
                .contains("center")
        );
        let taken = MoveError::CellTaken {
            board: Position::TopLeft,
            cell: Position::BottomRight,
        };
        assert!(taken.to_string().contains("bottom-right"));
        assert!(MoveError::IndexOutOfRange(9).to_string().contains('9'));
    }
}
