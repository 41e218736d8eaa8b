//! A single 3x3 local board.

use crate::action::MoveError;
use crate::position::Position;
use crate::rules;
use crate::types::{Cell, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the nine 3x3 boards of the global grid.
///
/// A local board owns its nine cells and nothing else. It has no
/// notion of availability: whether it may be played this turn is the
/// engine's constraint, which changes every turn without any cell
/// changing. Once its outcome is decided the board is closed and acts
/// as a single composite slot at the global level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBoard {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl LocalBoard {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Computes the board's outcome from its current cell marks.
    ///
    /// Pure query, recomputed on demand.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.cells)
    }

    /// Claims a cell for a player and returns the board's new outcome.
    ///
    /// `at` is this board's own slot in the global grid, carried only
    /// so rejections can name the board they refused.
    ///
    /// # Errors
    ///
    /// - [`MoveError::BoardClosed`] if the board is already decided.
    /// - [`MoveError::CellTaken`] if the cell is not empty.
    #[instrument(skip(self))]
    pub fn claim(
        &mut self,
        at: Position,
        cell: Position,
        player: Player,
    ) -> Result<Outcome, MoveError> {
        if self.outcome().is_decided() {
            return Err(MoveError::BoardClosed(at));
        }
        if !self.is_empty(cell) {
            return Err(MoveError::CellTaken { board: at, cell });
        }
        self.cells[cell.to_index()] = Cell::Claimed(player);
        Ok(self.outcome())
    }

    /// Formats the board as a human-readable 3x3 grid.
    ///
    /// A decided board renders as one big mark (or `=` for a draw),
    /// the way the original game collapsed a won board into a single
    /// composite cell.
    pub fn display(&self) -> String {
        match self.outcome() {
            Outcome::WonBy(player) => {
                let g = player.glyph();
                format!("{g} {g} {g}\n{g} {g} {g}\n{g} {g} {g}")
            }
            Outcome::Drawn => "= = =\n= = =\n= = =".to_string(),
            Outcome::Undecided => {
                let mut result = String::new();
                for pos in Position::ALL {
                    let symbol = match self.cell(pos) {
                        Cell::Empty => '.',
                        Cell::Claimed(player) => player.glyph(),
                    };
                    result.push(symbol);
                    if pos.col() < 2 {
                        result.push(' ');
                    } else if pos.row() < 2 {
                        result.push('\n');
                    }
                }
                result
            }
        }
    }
}

impl Default for LocalBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: Position = Position::TopLeft;

    #[test]
    fn test_new_board_is_open() {
        let board = LocalBoard::new();
        assert_eq!(board.outcome(), Outcome::Undecided);
        assert!(board.cells().iter().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_claim_marks_the_cell() {
        let mut board = LocalBoard::new();
        let outcome = board.claim(AT, Position::Center, Player::X).unwrap();
        assert_eq!(outcome, Outcome::Undecided);
        assert_eq!(board.cell(Position::Center), Cell::Claimed(Player::X));
    }

    #[test]
    fn test_claim_taken_cell_fails() {
        let mut board = LocalBoard::new();
        board.claim(AT, Position::Center, Player::X).unwrap();
        let err = board.claim(AT, Position::Center, Player::O).unwrap_err();
        assert_eq!(
            err,
            MoveError::CellTaken {
                board: AT,
                cell: Position::Center
            }
        );
        // The mark did not change.
        assert_eq!(board.cell(Position::Center), Cell::Claimed(Player::X));
    }

    #[test]
    fn test_third_in_a_row_wins() {
        let mut board = LocalBoard::new();
        board.claim(AT, Position::TopLeft, Player::X).unwrap();
        board.claim(AT, Position::TopCenter, Player::X).unwrap();
        let outcome = board.claim(AT, Position::TopRight, Player::X).unwrap();
        assert_eq!(outcome, Outcome::WonBy(Player::X));
    }

    #[test]
    fn test_decided_board_is_closed() {
        let mut board = LocalBoard::new();
        board.claim(AT, Position::TopLeft, Player::O).unwrap();
        board.claim(AT, Position::TopCenter, Player::O).unwrap();
        board.claim(AT, Position::TopRight, Player::O).unwrap();

        let err = board.claim(AT, Position::Center, Player::X).unwrap_err();
        assert_eq!(err, MoveError::BoardClosed(AT));
        assert!(board.is_empty(Position::Center));
    }

    #[test]
    fn test_outcome_is_idempotent() {
        let mut board = LocalBoard::new();
        board.claim(AT, Position::Center, Player::X).unwrap();
        assert_eq!(board.outcome(), board.outcome());
    }

    #[test]
    fn test_display_lays_out_open_board_row_major() {
        let mut board = LocalBoard::new();
        board.claim(AT, Position::TopCenter, Player::X).unwrap();
        board.claim(AT, Position::Center, Player::O).unwrap();
        board.claim(AT, Position::BottomLeft, Player::X).unwrap();
        assert_eq!(board.display(), ". X .\n. O .\nX . .");
    }

    #[test]
    fn test_display_collapses_won_board() {
        let mut board = LocalBoard::new();
        board.claim(AT, Position::TopLeft, Player::X).unwrap();
        board.claim(AT, Position::Center, Player::X).unwrap();
        board.claim(AT, Position::BottomRight, Player::X).unwrap();
        assert_eq!(board.display(), "X X X\nX X X\nX X X");
    }
}
