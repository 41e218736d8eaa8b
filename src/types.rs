//! Core domain types for Super Tic-Tac-Toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first by default).
    X,
    /// Player O (goes second by default).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character mark used in text rendering.
    pub fn glyph(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A cell on a local board.
///
/// A cell is its mark; there is no stored availability flag. Whether a
/// cell can be played is derived by the engine from the mark and the
/// active constraint, so "selectable" and "legal" can never diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell claimed by a player. Marks are write-once.
    Claimed(Player),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the claiming player, if any.
    pub fn claimant(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Claimed(player) => Some(player),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Decided/undecided status of a local board, the global board, or the
/// game as a whole.
///
/// `WonBy` and `Drawn` are terminal for the unit that produced them: a
/// decided board never re-evaluates to a different outcome because the
/// engine refuses further claims into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Still open.
    Undecided,
    /// Won by a player.
    WonBy(Player),
    /// Full with no winning line.
    Drawn,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::WonBy(player) => Some(player),
            _ => None,
        }
    }

    /// Checks whether the unit is decided (won or drawn).
    pub fn is_decided(self) -> bool {
        self != Outcome::Undecided
    }

    /// Checks whether the game ended in a draw.
    pub fn is_draw(self) -> bool {
        self == Outcome::Drawn
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "undecided"),
            Outcome::WonBy(player) => write!(f, "won by {player}"),
            Outcome::Drawn => write!(f, "drawn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent().opponent(), Player::X);
    }

    #[test]
    fn test_cell_claimant() {
        assert_eq!(Cell::Empty.claimant(), None);
        assert_eq!(Cell::Claimed(Player::O).claimant(), Some(Player::O));
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Claimed(Player::X).is_empty());
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(!Outcome::Undecided.is_decided());
        assert!(Outcome::Drawn.is_decided());
        assert!(Outcome::WonBy(Player::X).is_decided());
        assert_eq!(Outcome::WonBy(Player::X).winner(), Some(Player::X));
        assert_eq!(Outcome::Drawn.winner(), None);
    }
}
