//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every
//! successful move. They are checked as a debug postcondition in
//! [`crate::GameEngine::apply_move`] and testable on their own.

use crate::engine::{Constraint, GameEngine};
use crate::types::{Cell, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (MarkBalance, ConstraintOpen, ResultConsistent);

/// Invariant: mark counts stay balanced.
///
/// Players alternate, so across all 81 cells the two mark counts never
/// differ by more than one.
pub struct MarkBalance;

impl Invariant<GameEngine> for MarkBalance {
    fn holds(engine: &GameEngine) -> bool {
        let count = |player: Player| {
            engine
                .board()
                .boards()
                .iter()
                .flat_map(|board| board.cells())
                .filter(|cell| **cell == Cell::Claimed(player))
                .count() as i64
        };
        (count(Player::X) - count(Player::O)).abs() <= 1
    }

    fn description() -> &'static str {
        "X and O mark counts differ by at most one"
    }
}

/// Invariant: an in-progress constraint never points at a decided board.
///
/// The escape rule widens the constraint to every open board whenever
/// the send-to-board target is already decided, so a restricted
/// constraint always names a playable board.
pub struct ConstraintOpen;

impl Invariant<GameEngine> for ConstraintOpen {
    fn holds(engine: &GameEngine) -> bool {
        if engine.is_terminal() {
            return true;
        }
        match engine.constraint() {
            Constraint::AnyOpenBoard => true,
            Constraint::RestrictedTo(board) => !engine.local_outcome(board).is_decided(),
        }
    }

    fn description() -> &'static str {
        "an in-progress constraint points at an open board"
    }
}

/// Invariant: the cached result matches the recomputed global outcome.
pub struct ResultConsistent;

impl Invariant<GameEngine> for ResultConsistent {
    fn holds(engine: &GameEngine) -> bool {
        engine.global_outcome() == engine.board().outcome()
    }

    fn description() -> &'static str {
        "cached result equals the recomputed global outcome"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;

    #[test]
    fn test_invariants_hold_for_new_game() {
        let engine = GameEngine::new(Player::X);
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariants_hold_through_a_game() {
        let mut engine = GameEngine::new(Player::X);
        let moves = [
            (Position::Center, Position::Center),
            (Position::Center, Position::TopLeft),
            (Position::TopLeft, Position::Center),
            (Position::Center, Position::TopRight),
            (Position::TopRight, Position::Center),
        ];
        for (board, cell) in moves {
            engine.apply_move(Move::new(board, cell)).unwrap();
            assert!(EngineInvariants::check_all(&engine).is_ok());
        }
    }

    #[test]
    fn test_single_invariants_hold() {
        let engine = GameEngine::new(Player::O);
        assert!(MarkBalance::holds(&engine));
        assert!(ConstraintOpen::holds(&engine));
        assert!(ResultConsistent::holds(&engine));
    }
}
