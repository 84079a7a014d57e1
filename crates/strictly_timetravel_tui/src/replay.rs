//! Headless replay: drive the engine from the command line.

use anyhow::{Context, Result};
use strictly_timetravel::{DisplayOrder, GameEngine, GameView, Intent};
use tracing::{info, instrument, warn};

/// What to replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayRequest {
    /// Cells clicked in order.
    pub cells: Vec<usize>,
    /// Optional step to jump to afterwards.
    pub jump: Option<usize>,
    /// Flip the move list order.
    pub toggle_sort: bool,
}

/// Runs the intents in `request` against a fresh engine.
#[instrument(skip(request), fields(clicks = request.cells.len()))]
pub fn replay(request: &ReplayRequest, order: DisplayOrder) -> GameEngine {
    let mut engine = GameEngine::with_display_order(order);
    let jump = request.jump.map(Intent::HistoryJump);
    let toggle = request.toggle_sort.then_some(Intent::ToggleSort);

    let intents = request
        .cells
        .iter()
        .map(|&cell| Intent::CellClick(cell))
        .chain(jump)
        .chain(toggle);

    for intent in intents {
        if let Some(rejection) = engine.dispatch(intent).rejection() {
            warn!(%intent, %rejection, "Intent ignored");
        }
    }
    info!(step = engine.current_step(), status = %engine.status(), "Replay finished");
    engine
}

/// Renders a view as plain text: board, status, then the move list.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    out.push_str(&view.board().display());
    out.push_str("\n\n");
    out.push_str(view.status_text());
    out.push_str("\n\n");
    out.push_str(view.sort_label());
    out.push('\n');
    for entry in view.moves() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}\n", entry.description()));
    }
    out
}

/// Renders a view as pretty-printed JSON.
pub fn render_json(view: &GameView) -> Result<String> {
    serde_json::to_string_pretty(view).context("Failed to serialize game view")
}
