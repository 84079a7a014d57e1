//! Lineage invariant: each snapshot is its predecessor plus one mark.

use super::Invariant;
use crate::{GameEngine, Player, Square};

/// Invariant: for every step `k >= 1`, the board differs from step `k - 1`
/// in exactly the recorded square, and that square holds the mark of the
/// player whose turn it was at `k - 1`.
pub struct LineageInvariant;

impl Invariant<GameEngine> for LineageInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .entries()
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| {
                let (prev, next) = (&pair[0], &pair[1]);
                let Some(played) = next.played() else {
                    return false;
                };
                prev.board().diff(next.board()) == vec![played]
                    && next.board().get(played) == Square::Occupied(Player::for_step(prev_step))
            })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark for the player on turn"
    }
}
