//! Contract-based validation for engine commands.
//!
//! Preconditions decide whether an intent is applied or ignored.
//! Postconditions re-check the engine invariants after a change.

use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::rules::evaluate;
use crate::{GameEngine, Position, Rejection};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the cell index is on the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Resolves the index to a position.
    pub fn check(cell: usize) -> Result<Position, Rejection> {
        Position::from_index(cell).ok_or(Rejection::OutOfBounds(cell))
    }
}

/// Precondition: the current board has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects the move if the current board has a winner.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), Rejection> {
        match evaluate(engine.current_board()) {
            Some(_) => Err(Rejection::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the square is empty on the current board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects the move if `pos` is already marked.
    #[instrument(skip(engine))]
    pub fn check(pos: Position, engine: &GameEngine) -> Result<(), Rejection> {
        if engine.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition for a cell click.
///
/// Order matters only for which rejection is reported: bounds, then a
/// finished game, then occupancy. A drawn board fails on occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all move preconditions, returning the target position.
    #[instrument(skip(engine))]
    pub fn check(cell: usize, engine: &GameEngine) -> Result<Position, Rejection> {
        let pos = CellOnBoard::check(cell)?;
        GameNotOver::check(engine)?;
        SquareIsEmpty::check(pos, engine)?;
        Ok(pos)
    }
}

/// Precondition: the history step exists.
pub struct StepExists;

impl StepExists {
    /// Rejects the jump if `step` is past the end of history.
    pub fn check(step: usize, engine: &GameEngine) -> Result<(), Rejection> {
        let len = engine.history().len();
        if step < len {
            Ok(())
        } else {
            Err(Rejection::StepOutOfRange { step, len })
        }
    }
}

fn engine_invariants(after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
    EngineInvariants::check_all(after)
}

/// Contract for cell clicks.
pub struct MoveContract;

impl Contract<GameEngine, usize> for MoveContract {
    fn pre(engine: &GameEngine, cell: &usize) -> Result<(), Rejection> {
        LegalMove::check(*cell, engine).map(|_| ())
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        engine_invariants(after)?;
        // A move always lands directly after the step it was played from.
        if after.current_step() != before.current_step() + 1
            || after.history().len() != after.current_step() + 1
        {
            return Err(vec![InvariantViolation::new(
                "Move advances to a new newest entry right after the old step",
            )]);
        }
        Ok(())
    }
}

/// Contract for history jumps.
pub struct JumpContract;

impl Contract<GameEngine, usize> for JumpContract {
    fn pre(engine: &GameEngine, step: &usize) -> Result<(), Rejection> {
        StepExists::check(*step, engine)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        engine_invariants(after)?;
        if before.history() != after.history() {
            return Err(vec![InvariantViolation::new("Jump leaves history untouched")]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_square() {
        let engine = GameEngine::new();
        assert!(MoveContract::pre(&engine, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let engine = GameEngine::replay(&[4]);
        assert_eq!(
            MoveContract::pre(&engine, &4),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_off_board() {
        let engine = GameEngine::new();
        assert_eq!(MoveContract::pre(&engine, &9), Err(Rejection::OutOfBounds(9)));
    }

    #[test]
    fn test_precondition_after_win_reports_game_over() {
        let engine = GameEngine::replay(&[0, 3, 1, 4, 2]);
        assert_eq!(MoveContract::pre(&engine, &8), Err(Rejection::GameOver));
        // Even on an occupied square the finished game is reported first.
        assert_eq!(MoveContract::pre(&engine, &0), Err(Rejection::GameOver));
    }

    #[test]
    fn test_jump_precondition() {
        let engine = GameEngine::replay(&[0, 1]);
        assert!(JumpContract::pre(&engine, &2).is_ok());
        assert_eq!(
            JumpContract::pre(&engine, &3),
            Err(Rejection::StepOutOfRange { step: 3, len: 3 })
        );
    }

    #[test]
    fn test_move_postcondition_holds_after_move() {
        let before = GameEngine::replay(&[0, 1]);
        let mut after = before.clone();
        let _ = after.apply_move(2);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_jump_postcondition_detects_history_change() {
        let before = GameEngine::replay(&[0, 1]);
        let after = GameEngine::replay(&[0, 2]);
        assert!(JumpContract::post(&before, &after).is_err());
    }
}
