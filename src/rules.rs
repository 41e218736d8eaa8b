//! Win and draw evaluation shared by both board levels.
//!
//! This module contains the one pure routine that decides a 3x3 unit.
//! `LocalBoard` runs it over cell marks; `GlobalBoard` runs it over
//! local-board outcomes. The original duck-typed recursion across a
//! shared base class becomes a free function over a [`Slot`] trait.

use crate::types::{Outcome, Player};
use tracing::instrument;

/// The 8 winning lines of a 3x3 grid: 3 rows, 3 columns, 2 diagonals,
/// in row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// One of the nine sub-units a 3x3 grid is evaluated over.
///
/// A slot is either claimed by a player (a marked cell, a won local
/// board), settled without a claimant (a drawn local board), or open.
/// Drawn slots never contribute to a winning line but do count toward
/// the all-settled draw check.
pub trait Slot {
    /// The player holding this slot for win-line purposes, if any.
    fn claimant(&self) -> Option<Player>;

    /// Whether this slot can no longer change (marked or decided).
    fn is_settled(&self) -> bool;
}

impl Slot for crate::types::Cell {
    fn claimant(&self) -> Option<Player> {
        crate::types::Cell::claimant(*self)
    }

    fn is_settled(&self) -> bool {
        !self.is_empty()
    }
}

impl Slot for Outcome {
    fn claimant(&self) -> Option<Player> {
        self.winner()
    }

    fn is_settled(&self) -> bool {
        self.is_decided()
    }
}

/// Evaluates a 3x3 unit from its nine slots.
///
/// Returns `WonBy(player)` if any of the 8 lines is fully claimed by
/// one player, `Drawn` if no line is complete and every slot is
/// settled, and `Undecided` otherwise.
///
/// A single claim changes one slot, so at most one player's win
/// condition can newly hold per call; no tie-break between players is
/// needed (the tests exercise this construction).
#[instrument(skip(slots))]
pub fn evaluate<S: Slot>(slots: &[S; 9]) -> Outcome {
    for [a, b, c] in LINES {
        if let Some(player) = slots[a].claimant()
            && slots[b].claimant() == Some(player)
            && slots[c].claimant() == Some(player)
        {
            return Outcome::WonBy(player);
        }
    }

    if slots.iter().all(Slot::is_settled) {
        Outcome::Drawn
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn marks(claims: &[(usize, Player)]) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for &(index, player) in claims {
            cells[index] = Cell::Claimed(player);
        }
        cells
    }

    #[test]
    fn test_empty_grid_undecided() {
        assert_eq!(evaluate(&[Cell::Empty; 9]), Outcome::Undecided);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let cells = marks(&line.map(|index| (index, Player::X)));
            assert_eq!(evaluate(&cells), Outcome::WonBy(Player::X), "line {line:?}");
        }
    }

    #[test]
    fn test_incomplete_line_undecided() {
        let cells = marks(&[(0, Player::X), (1, Player::X)]);
        assert_eq!(evaluate(&cells), Outcome::Undecided);
    }

    #[test]
    fn test_full_grid_no_line_is_drawn() {
        // X O X / O X X / O X O
        use Player::{O, X};
        let cells = marks(&[
            (0, X),
            (1, O),
            (2, X),
            (3, O),
            (4, X),
            (5, X),
            (6, O),
            (7, X),
            (8, O),
        ]);
        assert_eq!(evaluate(&cells), Outcome::Drawn);
    }

    #[test]
    fn test_win_on_last_slot_beats_draw() {
        // Filling the last cell completes a column; the line check
        // runs before the all-settled check.
        use Player::{O, X};
        let cells = marks(&[
            (0, X),
            (1, O),
            (2, X),
            (3, X),
            (4, O),
            (5, O),
            (6, X),
            (7, O),
            (8, X),
        ]);
        assert_eq!(evaluate(&cells), Outcome::WonBy(Player::X));
    }

    #[test]
    fn test_outcomes_as_slots() {
        // Won boards claim their slot; drawn boards settle it without
        // claiming, so a diagonal through a drawn board is no win.
        let mut outcomes = [Outcome::Undecided; 9];
        outcomes[0] = Outcome::WonBy(Player::O);
        outcomes[4] = Outcome::Drawn;
        outcomes[8] = Outcome::WonBy(Player::O);
        assert_eq!(evaluate(&outcomes), Outcome::Undecided);

        outcomes[4] = Outcome::WonBy(Player::O);
        assert_eq!(evaluate(&outcomes), Outcome::WonBy(Player::O));
    }

    #[test]
    fn test_all_boards_decided_no_line_is_drawn() {
        use Player::{O, X};
        let outcomes = [
            Outcome::WonBy(X),
            Outcome::WonBy(O),
            Outcome::WonBy(X),
            Outcome::WonBy(O),
            Outcome::Drawn,
            Outcome::WonBy(X),
            Outcome::WonBy(O),
            Outcome::WonBy(X),
            Outcome::WonBy(O),
        ];
        assert_eq!(evaluate(&outcomes), Outcome::Drawn);
    }
}
