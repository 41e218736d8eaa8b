//! Serializable view of the engine state.

use crate::engine::{Constraint, GameEngine};
use crate::types::{Cell, Outcome, Player};
use serde::{Deserialize, Serialize};

/// A point-in-time view of the whole game.
///
/// Returned by every successful [`GameEngine::apply_move`] and
/// available any time via [`GameEngine::snapshot`]. Renderers work
/// from this instead of reaching into the engine; it also serializes
/// cleanly for headless harnesses that want JSON out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Cell marks, indexed `[local board][cell]`, row-major.
    pub cells: [[Cell; 9]; 9],
    /// Outcome of each local board, row-major.
    pub local_outcomes: [Outcome; 9],
    /// The active move constraint.
    pub constraint: Constraint,
    /// Player to move (fixed on the last mover once finished).
    pub active_player: Player,
    /// Overall game result.
    pub result: Outcome,
}

impl From<&GameEngine> for EngineSnapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            cells: std::array::from_fn(|index| {
                *engine.board().boards()[index].cells()
            }),
            local_outcomes: engine.board().local_outcomes(),
            constraint: engine.constraint(),
            active_player: engine.current_player(),
            result: engine.global_outcome(),
        }
    }
}

impl EngineSnapshot {
    /// Checks whether the game is over in this view.
    pub fn is_terminal(&self) -> bool {
        self.result.is_decided()
    }
}
