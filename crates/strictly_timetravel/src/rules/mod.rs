//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. The engine calls them on whichever
//! snapshot is current, so they never see history.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, evaluate};
