//! Render surface for presentation layers.

use crate::{Board, GameEngine, GameStatus, MoveEntry};
use derive_getters::Getters;
use serde::Serialize;

/// Snapshot of everything a presentation layer draws.
///
/// Built fresh from the engine after each intent; holding one never
/// borrows the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Indices of the winning line; empty without a win.
    winning_line: Vec<usize>,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Structured status.
    status: GameStatus,
    /// Status caption, e.g. `Next player: X`.
    status_text: String,
    /// Index of the current snapshot.
    current_step: usize,
    /// Sort button caption.
    sort_label: String,
}

impl GameView {
    pub(crate) fn from_engine(engine: &GameEngine) -> Self {
        let status = engine.status();
        Self {
            board: engine.current_board().clone(),
            winning_line: engine.winning_line().iter().map(|p| p.to_index()).collect(),
            moves: engine.list_moves(),
            status_text: status.to_string(),
            status,
            current_step: engine.current_step(),
            sort_label: engine.display_order().label().to_string(),
        }
    }

    /// Returns true if the cell at `index` is part of the winning line.
    pub fn is_winning(&self, index: usize) -> bool {
        self.winning_line.contains(&index)
    }
}
