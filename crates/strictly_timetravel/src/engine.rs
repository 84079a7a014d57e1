//! Time-travel game engine.
//!
//! The engine owns the history and the current step. Every command is
//! validated against its contract; a failed precondition leaves the engine
//! untouched and comes back as [`Transition::Ignored`].

use crate::contracts::{Contract, JumpContract, LegalMove};
#[cfg(debug_assertions)]
use crate::contracts::MoveContract;
use crate::rules::{evaluate, is_full};
use crate::{
    Board, DisplayOrder, GameStatus, GameView, History, HistoryEntry, Intent, Player, Position,
    Rejection, Transition, WinResult,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveEntry {
    /// History step this line jumps to.
    step: usize,
    /// Human-readable caption.
    description: String,
    /// True for the entry at the current step.
    is_current: bool,
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Tic-tac-toe engine with navigable history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: History,
    pub(crate) current_step: usize,
    pub(crate) display_order: DisplayOrder,
}

impl GameEngine {
    /// Creates a new game: blank board, X to move, default ordering.
    #[instrument]
    pub fn new() -> Self {
        Self::with_display_order(DisplayOrder::default())
    }

    /// Creates a new game with the given move list ordering.
    #[instrument]
    pub fn with_display_order(display_order: DisplayOrder) -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            display_order,
        }
    }

    /// Builds a game by clicking each cell in turn.
    ///
    /// Illegal clicks are ignored exactly as they would be interactively.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        let mut engine = Self::new();
        for &cell in cells {
            let _ = engine.apply_move(cell);
        }
        engine
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Routes an intent to the matching command.
    pub fn dispatch(&mut self, intent: Intent) -> Transition {
        match intent {
            Intent::CellClick(cell) => self.apply_move(cell),
            Intent::HistoryJump(step) => self.jump_to(step),
            Intent::ToggleSort => self.toggle_sort_order(),
        }
    }

    /// Plays the mark of the player on turn at `cell`.
    ///
    /// Any entries after the current step are discarded first, so playing
    /// from an earlier snapshot starts a new branch.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, cell: usize) -> Transition {
        let pos = match LegalMove::check(cell, self) {
            Ok(pos) => pos,
            Err(rejection) => return self.ignore(rejection),
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let board = self.current_board().with_mark(pos, player);
        self.current_step = self
            .history
            .branch(self.current_step, HistoryEntry::new(board, pos));
        info!(%player, position = %pos, step = self.current_step, "Move applied");

        #[cfg(debug_assertions)]
        self.verify::<MoveContract>(&before);

        Transition::Applied
    }

    /// Makes `step` the current snapshot. History is left intact.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Transition {
        if let Err(rejection) = JumpContract::pre(self, &step) {
            return self.ignore(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.current_step = step;
        info!(step, next = %self.next_player(), "Jumped to step");

        #[cfg(debug_assertions)]
        self.verify::<JumpContract>(&before);

        Transition::Applied
    }

    /// Flips the move list ordering.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) -> Transition {
        self.display_order = self.display_order.toggled();
        debug!(order = %self.display_order, "Sort order toggled");
        Transition::Applied
    }

    fn ignore(&self, rejection: Rejection) -> Transition {
        debug!(%rejection, step = self.current_step, "Intent ignored");
        Transition::Ignored(rejection)
    }

    #[cfg(debug_assertions)]
    fn verify<C: Contract<GameEngine, usize>>(&self, before: &GameEngine) {
        if let Err(violations) = C::post(before, self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description().as_str())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::error!(%descriptions, "Engine postcondition failed");
            debug_assert!(false, "Postcondition failed: {descriptions}");
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Index of the current snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move list ordering.
    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
    }

    /// The current snapshot.
    pub fn current_entry(&self) -> &HistoryEntry {
        // current_step < history.len() is an engine invariant
        &self.history.entries()[self.current_step]
    }

    /// The current board.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Player on turn, derived from the step parity.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Winning line on the current board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        evaluate(self.current_board())
    }

    /// Winning positions on the current board; empty without a win.
    pub fn winning_line(&self) -> Vec<Position> {
        self.winner()
            .map(|win| win.line().to_vec())
            .unwrap_or_default()
    }

    /// Status of the current snapshot.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.winner() {
            GameStatus::Won(win)
        } else if is_full(self.current_board()) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// Move list in display order.
    pub fn list_moves(&self) -> Vec<MoveEntry> {
        let entries = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveEntry {
                step,
                description: describe(step, entry),
                is_current: step == self.current_step,
            })
            .collect();
        self.display_order.arrange(entries)
    }

    /// Everything a presentation layer needs to render the game.
    pub fn view(&self) -> GameView {
        GameView::from_engine(self)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(step: usize, entry: &HistoryEntry) -> String {
    match entry.location() {
        Some(location) if step > 0 => format!("Go to move #{step} @ {location}"),
        _ => "Go to game start".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_step(), 0);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.next_player(), Player::X);
        assert_eq!(engine.display_order(), DisplayOrder::Descending);
        assert_eq!(engine.status(), GameStatus::NextPlayer(Player::X));
    }

    #[test]
    fn test_move_at_tip_appends() {
        let mut engine = GameEngine::new();
        assert!(engine.apply_move(4).is_applied());
        assert_eq!(engine.history().len(), 2);
        assert_eq!(engine.current_step(), 1);
        assert_eq!(engine.next_player(), Player::O);
        assert_eq!(
            engine.current_entry().location().map(|l| l.to_string()),
            Some("2,2".to_string())
        );
    }

    #[test]
    fn test_out_of_range_cell_ignored() {
        let mut engine = GameEngine::replay(&[0]);
        let before = engine.clone();
        assert_eq!(
            engine.apply_move(42),
            Transition::Ignored(Rejection::OutOfBounds(42))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_jump_does_not_touch_history() {
        let mut engine = GameEngine::replay(&[0, 1, 2]);
        assert!(engine.jump_to(1).is_applied());
        assert_eq!(engine.history().len(), 4);
        assert_eq!(engine.current_step(), 1);
        assert_eq!(engine.next_player(), Player::O);

        // Redo by jumping forward again.
        assert!(engine.jump_to(3).is_applied());
        assert_eq!(engine.current_board(), engine.history().entries()[3].board());
    }

    #[test]
    fn test_jump_out_of_range_ignored() {
        let mut engine = GameEngine::replay(&[0, 1]);
        let before = engine.clone();
        assert_eq!(
            engine.jump_to(3),
            Transition::Ignored(Rejection::StepOutOfRange { step: 3, len: 3 })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_jump_back_from_win_reopens_play() {
        let mut engine = GameEngine::replay(&[0, 3, 1, 4, 2]);
        assert!(engine.status().is_over());
        let _ = engine.jump_to(4);
        assert_eq!(engine.status(), GameStatus::NextPlayer(Player::X));
        assert!(engine.apply_move(8).is_applied());
        assert_eq!(engine.history().len(), 6);
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_list_moves_descriptions() {
        let engine = GameEngine::replay(&[1, 3]);
        let moves: Vec<String> = engine.list_moves().iter().map(ToString::to_string).collect();
        assert_eq!(
            moves,
            vec!["Go to game start", "Go to move #1 @ 2,1", "Go to move #2 @ 1,2"]
        );
    }

    #[test]
    fn test_list_moves_marks_current_step() {
        let mut engine = GameEngine::replay(&[1, 3]);
        let _ = engine.jump_to(1);
        let current: Vec<usize> = engine
            .list_moves()
            .iter()
            .filter(|m| *m.is_current())
            .map(|m| *m.step())
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_ascending_lists_latest_first() {
        let mut engine = GameEngine::replay(&[1, 3]);
        let _ = engine.toggle_sort_order();
        let steps: Vec<usize> = engine.list_moves().iter().map(|m| *m.step()).collect();
        assert_eq!(steps, vec![2, 1, 0]);
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut engine = GameEngine::new();
        assert!(engine.dispatch(Intent::CellClick(0)).is_applied());
        assert!(engine.dispatch(Intent::HistoryJump(0)).is_applied());
        assert!(engine.dispatch(Intent::ToggleSort).is_applied());
        assert_eq!(engine.current_step(), 0);
        assert_eq!(engine.display_order(), DisplayOrder::Ascending);
        assert!(!engine.dispatch(Intent::HistoryJump(5)).is_applied());
    }
}
