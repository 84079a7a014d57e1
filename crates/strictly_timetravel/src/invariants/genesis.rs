//! Genesis invariant: history starts from a blank board with no move.

use super::Invariant;
use crate::GameEngine;

/// Invariant: entry 0 is the blank board and records no move.
pub struct GenesisInvariant;

impl Invariant<GameEngine> for GenesisInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .get(0)
            .is_some_and(|entry| entry.board().is_blank() && entry.played().is_none())
    }

    fn description() -> &'static str {
        "History starts with a blank board and no move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEntry, Player, Position};

    #[test]
    fn test_holds_after_play() {
        let engine = GameEngine::replay(&[0, 1, 2]);
        assert!(GenesisInvariant::holds(&engine));
    }

    #[test]
    fn test_marked_genesis_violates() {
        let mut engine = GameEngine::new();
        engine.history.entries_mut()[0] = HistoryEntry::new(
            Board::new().with_mark(Position::Center, Player::X),
            Position::Center,
        );
        assert!(!GenesisInvariant::holds(&engine));
    }
}
