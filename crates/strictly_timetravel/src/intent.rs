//! User intents and their outcomes.
//!
//! Intents are what the presentation layer sends: a cell click, a jump to a
//! history step, or a sort toggle. An intent that breaks a precondition is
//! not a fault, it simply does nothing, and the [`Rejection`] says why.

use crate::Position;

/// An action requested by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Intent {
    /// Play the current player's mark at a raw cell index.
    #[display("click cell {_0}")]
    CellClick(usize),
    /// Make a history step current.
    #[display("jump to step {_0}")]
    HistoryJump(usize),
    /// Flip the move list ordering.
    #[display("toggle sort order")]
    ToggleSort,
}

/// Why an intent left the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// The cell index is outside 0-8.
    #[display("Cell index {_0} is off the board")]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The history step does not exist.
    #[display("Step {step} is outside history of length {len}")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Result of handling an intent.
///
/// `Ignored` is informational: the engine state is exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The intent changed the game state.
    Applied,
    /// The intent was ignored.
    Ignored(Rejection),
}

impl Transition {
    /// Returns true if the intent changed the game state.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }

    /// The rejection, if the intent was ignored.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Transition::Applied => None,
            Transition::Ignored(rejection) => Some(rejection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_exposes_rejection() {
        assert_eq!(Transition::Applied.rejection(), None);
        let ignored = Transition::Ignored(Rejection::GameOver);
        assert!(!ignored.is_applied());
        assert_eq!(ignored.rejection(), Some(&Rejection::GameOver));
    }

    #[test]
    fn test_intent_display() {
        assert_eq!(Intent::CellClick(4).to_string(), "click cell 4");
        assert_eq!(Intent::HistoryJump(2).to_string(), "jump to step 2");
        assert_eq!(Intent::ToggleSort.to_string(), "toggle sort order");
    }
}
