//! Strictly Timetravel - unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_timetravel::GameEngine;
use strictly_timetravel_tui::{
    Cli, Command, ReplayRequest, TuiConfig, render_json, render_text, replay, run_tui,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    match cli.command() {
        Command::Play => run_play(&config),
        Command::Replay {
            cells,
            jump,
            toggle_sort,
            json,
        } => run_replay(
            &config,
            ReplayRequest {
                cells,
                jump,
                toggle_sort,
            },
            json,
        ),
    }
}

fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the interactive TUI, logging to a file so the screen stays clean
fn run_play(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    run_tui(GameEngine::with_display_order(*config.initial_order()))
}

/// Replay clicks headlessly and print the result
fn run_replay(config: &TuiConfig, request: ReplayRequest, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();

    info!(?request, "Replaying");
    let engine = replay(&request, *config.initial_order());
    let view = engine.view();
    let output = if json {
        render_json(&view)?
    } else {
        render_text(&view)
    };
    print!("{output}");
    if json {
        println!();
    }
    Ok(())
}
