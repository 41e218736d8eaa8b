//! The global 3x3 grid of local boards.

use crate::action::MoveError;
use crate::local::LocalBoard;
use crate::position::Position;
use crate::rules;
use crate::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The full Super Tic-Tac-Toe board: nine local boards.
///
/// The global outcome is computed with the same line scan as a local
/// board, over local-board outcomes instead of cell marks. A won local
/// board counts as claimed by its winner; a drawn one counts as
/// claimed by neither but filled for the draw check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalBoard {
    /// Local boards in row-major order (0-8).
    boards: [LocalBoard; 9],
}

impl GlobalBoard {
    /// Creates a new board with nine empty local boards.
    pub fn new() -> Self {
        Self {
            boards: std::array::from_fn(|_| LocalBoard::new()),
        }
    }

    /// Gets the local board at the given position.
    pub fn board(&self, pos: Position) -> &LocalBoard {
        &self.boards[pos.to_index()]
    }

    /// Returns all local boards as a slice.
    pub fn boards(&self) -> &[LocalBoard; 9] {
        &self.boards
    }

    /// Outcomes of the nine local boards, in row-major order.
    pub fn local_outcomes(&self) -> [Outcome; 9] {
        std::array::from_fn(|index| self.boards[index].outcome())
    }

    /// Computes the global outcome from the local-board outcomes.
    ///
    /// Pure query, recomputed on demand.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.local_outcomes())
    }

    /// Delegates a claim into one local board and returns the global
    /// board's new outcome.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError::BoardClosed`] / [`MoveError::CellTaken`]
    /// from the targeted local board.
    #[instrument(skip(self))]
    pub fn apply_claim(
        &mut self,
        board: Position,
        cell: Position,
        player: Player,
    ) -> Result<Outcome, MoveError> {
        self.boards[board.to_index()].claim(board, cell, player)?;
        Ok(self.outcome())
    }

    /// Formats the whole grid as nine 3x3 blocks.
    pub fn display(&self) -> String {
        let blocks: Vec<Vec<String>> = self
            .boards
            .iter()
            .map(|board| board.display().lines().map(str::to_string).collect())
            .collect();
        let mut result = String::new();
        for board_row in 0..3 {
            for line in 0..3 {
                let row: Vec<&str> = (0..3)
                    .map(|board_col| blocks[board_row * 3 + board_col][line].as_str())
                    .collect();
                result.push_str(&row.join("  |  "));
                result.push('\n');
            }
            if board_row < 2 {
                result.push_str("------+---------+------\n");
            }
        }
        result
    }
}

impl Default for GlobalBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win_board(global: &mut GlobalBoard, at: Position, player: Player) {
        let board = &mut global.boards[at.to_index()];
        board.claim(at, Position::TopLeft, player).unwrap();
        board.claim(at, Position::TopCenter, player).unwrap();
        board.claim(at, Position::TopRight, player).unwrap();
    }

    #[test]
    fn test_new_board_undecided() {
        let global = GlobalBoard::new();
        assert_eq!(global.outcome(), Outcome::Undecided);
        assert_eq!(global.local_outcomes(), [Outcome::Undecided; 9]);
    }

    #[test]
    fn test_apply_claim_reaches_the_right_cell() {
        let mut global = GlobalBoard::new();
        global
            .apply_claim(Position::MiddleLeft, Position::BottomRight, Player::X)
            .unwrap();
        assert_eq!(
            global
                .board(Position::MiddleLeft)
                .cell(Position::BottomRight)
                .claimant(),
            Some(Player::X)
        );
        // No other board was touched.
        assert!(global.board(Position::Center).cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_claim_into_closed_board_fails() {
        let mut global = GlobalBoard::new();
        win_board(&mut global, Position::Center, Player::O);
        let err = global
            .apply_claim(Position::Center, Position::BottomLeft, Player::X)
            .unwrap_err();
        assert_eq!(err, MoveError::BoardClosed(Position::Center));
    }

    #[test]
    fn test_diagonal_of_won_boards_wins_the_game() {
        let mut global = GlobalBoard::new();
        win_board(&mut global, Position::TopLeft, Player::X);
        win_board(&mut global, Position::Center, Player::X);
        assert_eq!(global.outcome(), Outcome::Undecided);
        win_board(&mut global, Position::BottomRight, Player::X);
        assert_eq!(global.outcome(), Outcome::WonBy(Player::X));
    }
}
