//! Step bounds invariant: the current step always names a history entry.

use super::Invariant;
use crate::GameEngine;

/// Invariant: `current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameEngine> for StepInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_step() < engine.history().len()
    }

    fn description() -> &'static str {
        "Current step points at an existing history entry"
    }
}
