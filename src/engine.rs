//! The turn state machine: constraint, legality, and terminal state.

use crate::action::{Move, MoveError};
use crate::global::GlobalBoard;
use crate::invariants::InvariantSet;
use crate::position::Position;
use crate::snapshot::EngineSnapshot;
use crate::types::{Cell, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which local boards are legal targets for the next move.
///
/// Set once per completed turn from the cell just played: the cell's
/// position names the board the opponent is sent to. If that board is
/// already decided, every open board becomes legal instead, so the game
/// stays progressable while any empty cell remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constraint {
    /// Any local board that is still undecided.
    AnyOpenBoard,
    /// Only the named local board.
    RestrictedTo(Position),
}

impl Constraint {
    /// Checks whether the constraint permits playing in a board.
    ///
    /// This is the constraint test alone; board-closed and cell-taken
    /// checks are separate.
    pub fn allows(self, board: Position) -> bool {
        match self {
            Constraint::AnyOpenBoard => true,
            Constraint::RestrictedTo(required) => board == required,
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::AnyOpenBoard => write!(f, "any open board"),
            Constraint::RestrictedTo(board) => write!(f, "the {board} board"),
        }
    }
}

/// The Super Tic-Tac-Toe game engine.
///
/// Owns the global board, the active player, the move constraint, and
/// the cached result. [`GameEngine::apply_move`] is the single mutating
/// entry point; everything else is a side-effect-free query. A failed
/// move leaves every piece of state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: GlobalBoard,
    active: Player,
    constraint: Constraint,
    /// Authoritative "is the game over" signal; mirrors the global
    /// outcome after every successful move.
    result: Outcome,
}

impl GameEngine {
    /// Creates a new game with the given first player and no board
    /// restriction.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: GlobalBoard::new(),
            active: first_player,
            constraint: Constraint::AnyOpenBoard,
            result: Outcome::Undecided,
        }
    }

    /// Starts the game over with a fresh board. Equivalent to
    /// constructing a new engine; nothing carries over.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first_player: Player) {
        *self = Self::new(first_player);
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The player whose turn it is. Once the game is finished this
    /// stays fixed on whoever moved last.
    pub fn current_player(&self) -> Player {
        self.active
    }

    /// The active move constraint.
    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    /// The global board.
    pub fn board(&self) -> &GlobalBoard {
        &self.board
    }

    /// Mark of a single cell.
    pub fn cell(&self, board: Position, cell: Position) -> Cell {
        self.board.board(board).cell(cell)
    }

    /// Outcome of a single local board.
    pub fn local_outcome(&self, board: Position) -> Outcome {
        self.board.board(board).outcome()
    }

    /// Outcome of the game as a whole.
    pub fn global_outcome(&self) -> Outcome {
        self.result
    }

    /// Checks whether the game is over.
    pub fn is_terminal(&self) -> bool {
        self.result.is_decided()
    }

    /// Checks whether a cell is a legal target for the next move.
    ///
    /// Derived on demand from the mark, the board's outcome, and the
    /// constraint; nothing caches availability.
    pub fn is_playable(&self, board: Position, cell: Position) -> bool {
        !self.is_terminal()
            && self.constraint.allows(board)
            && !self.local_outcome(board).is_decided()
            && self.cell(board, cell).is_empty()
    }

    /// The local boards a move may currently target.
    pub fn open_boards(&self) -> Vec<Position> {
        if self.is_terminal() {
            return Vec::new();
        }
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.constraint.allows(pos) && !self.local_outcome(pos).is_decided())
            .collect()
    }

    /// A serializable view of the whole engine.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::from(self)
    }

    // ─────────────────────────────────────────────────────────────
    //  The single mutating entry point
    // ─────────────────────────────────────────────────────────────

    /// Applies a move for the active player.
    ///
    /// On success the cell is claimed, outcomes are recomputed, the
    /// next constraint is derived from the played cell (send-to-board
    /// rule, with the escape to [`Constraint::AnyOpenBoard`] when the
    /// target board is decided), and the turn passes to the opponent
    /// unless the game just ended. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// In validation order: [`MoveError::GameOver`],
    /// [`MoveError::IllegalBoard`], [`MoveError::BoardClosed`],
    /// [`MoveError::CellTaken`].
    #[instrument(skip(self), fields(player = %self.active, mov = %mov))]
    pub fn apply_move(&mut self, mov: Move) -> Result<EngineSnapshot, MoveError> {
        let Move { board, cell } = mov;

        // Validate everything before touching any state.
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if let Constraint::RestrictedTo(required) = self.constraint
            && board != required
        {
            return Err(MoveError::IllegalBoard(required));
        }
        if self.local_outcome(board).is_decided() {
            return Err(MoveError::BoardClosed(board));
        }
        if !self.cell(board, cell).is_empty() {
            return Err(MoveError::CellTaken { board, cell });
        }

        let player = self.active;
        self.result = self.board.apply_claim(board, cell, player)?;

        // Send-to-board rule: the played cell names the next board.
        // Escape to all open boards if that board is already decided.
        self.constraint = if self.local_outcome(cell).is_decided() {
            Constraint::AnyOpenBoard
        } else {
            Constraint::RestrictedTo(cell)
        };

        if self.result.is_decided() {
            debug!(result = %self.result, "game finished");
        } else {
            self.active = player.opponent();
            debug!(next = %self.active, constraint = %self.constraint, "turn complete");
        }

        debug_assert!(
            crate::invariants::EngineInvariants::check_all(self).is_ok(),
            "move postcondition violated"
        );

        Ok(self.snapshot())
    }

    /// Applies a move given raw 0-8 indices.
    ///
    /// # Errors
    ///
    /// [`MoveError::IndexOutOfRange`] for an index outside 0-8, plus
    /// everything [`GameEngine::apply_move`] reports.
    #[instrument(skip(self))]
    pub fn apply_indices(
        &mut self,
        board: usize,
        cell: usize,
    ) -> Result<EngineSnapshot, MoveError> {
        let board = Position::from_index(board).ok_or(MoveError::IndexOutOfRange(board))?;
        let cell = Position::from_index(cell).ok_or(MoveError::IndexOutOfRange(cell))?;
        self.apply_move(Move::new(board, cell))
    }
}
