//! Derived game status.

use crate::{Player, WinResult};
use serde::{Deserialize, Serialize};

/// Status of the current snapshot.
///
/// Always recomputed from the board and step; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Winner: {_0}")]
    Won(WinResult),
    /// The board is full with no line.
    #[display("draw")]
    Draw,
    /// Play continues with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl GameStatus {
    /// Returns true for a win or draw.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }

    /// The winning line, if any.
    pub fn win(&self) -> Option<&WinResult> {
        match self {
            GameStatus::Won(win) => Some(win),
            _ => None,
        }
    }
}
