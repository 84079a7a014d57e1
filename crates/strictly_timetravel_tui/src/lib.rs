//! Terminal front end for Strictly Timetravel
//!
//! A thin presentation layer over [`strictly_timetravel::GameEngine`]: it
//! renders the engine's view and turns key presses into intents.
//!
//! - **App**: key handling and cursor/selection state
//! - **UI**: stateless ratatui rendering
//! - **Replay**: headless command-line driver with text or JSON output
//! - **Config**: TOML configuration

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod terminal;
mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TuiConfig};
pub use replay::{ReplayRequest, render_json, render_text, replay};
pub use terminal::run as run_tui;
pub use ui::draw;
