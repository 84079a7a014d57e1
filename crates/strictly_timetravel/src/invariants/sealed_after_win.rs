//! Sealed-after-win invariant: nothing is played on a won board.

use super::Invariant;
use crate::GameEngine;
use crate::rules::evaluate;

/// Invariant: no history entry follows a board that already has a winner.
pub struct SealedAfterWinInvariant;

impl Invariant<GameEngine> for SealedAfterWinInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let entries = engine.history().entries();
        entries
            .iter()
            .take(entries.len().saturating_sub(1))
            .all(|entry| evaluate(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No move follows a winning board"
    }
}
