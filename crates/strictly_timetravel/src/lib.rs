//! Strictly Timetravel - tic-tac-toe with a navigable move history
//!
//! The engine keeps every board the game has passed through. Any earlier
//! board can be made current, and playing from it discards the boards that
//! came after and starts a new line of play.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a single board
//! - **History**: immutable board snapshots, oldest first
//! - **Engine**: the current step, move application, jumps, derived status
//! - **Contracts / Invariants**: preconditions for intents, postconditions
//!   checked in debug builds
//! - **View**: a serializable render surface for presentation layers
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameEngine, GameStatus, Intent, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     engine.dispatch(Intent::CellClick(cell));
//! }
//! assert!(matches!(engine.status(), GameStatus::Won(_)));
//! assert_eq!(engine.status().to_string(), "Winner: X @ 0,4,8");
//!
//! engine.dispatch(Intent::HistoryJump(1));
//! assert_eq!(engine.status(), GameStatus::NextPlayer(Player::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod history;
mod intent;
mod order;
mod position;
mod status;
mod types;
mod view;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use engine::{GameEngine, MoveEntry};
pub use history::{History, HistoryEntry};
pub use intent::{Intent, Rejection, Transition};
pub use order::DisplayOrder;
pub use position::{Location, Position};
pub use rules::WinResult;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
pub use view::GameView;
