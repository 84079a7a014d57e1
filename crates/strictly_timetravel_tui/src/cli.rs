//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with time-travel replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a sequence of cell clicks and print the resulting game
    Replay {
        /// Cell indices (0-8), space or comma separated
        #[arg(value_delimiter = ',')]
        cells: Vec<usize>,

        /// History step to jump to after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Flip the move list order before printing
        #[arg(long)]
        toggle_sort: bool,

        /// Print the render surface as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, falling back to `play`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
