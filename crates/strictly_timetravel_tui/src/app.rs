//! Application state and key handling.
//!
//! The app never touches game state directly: every key that matters is
//! turned into an [`Intent`] and handed to the engine.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use strictly_timetravel::{GameEngine, GameView, Intent, Position, Transition};
use tracing::debug;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the move list selection.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates an application around an engine.
    pub fn new(engine: GameEngine) -> Self {
        let selected_step = engine.current_step();
        Self {
            engine,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step,
            should_quit: false,
        }
    }

    /// The engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Render surface for the current state.
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Index of the selection within the displayed move list.
    pub fn selected_row(&self) -> usize {
        self.engine
            .list_moves()
            .iter()
            .position(|m| *m.step() == self.selected_step)
            .unwrap_or(0)
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            KeyCode::Char('s') => self.send(Intent::ToggleSort),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let intent = match self.focus {
                    Focus::Board => Intent::CellClick(self.cursor.to_index()),
                    Focus::Moves => Intent::HistoryJump(self.selected_step),
                };
                self.send(intent);
            }
            KeyCode::Char(c) => {
                if let Some(cell) = digit_cell(c) {
                    self.send(Intent::CellClick(cell));
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::Moves => self.move_selection(key),
            },
            _ => {}
        }
    }

    fn send(&mut self, intent: Intent) {
        let transition = self.engine.dispatch(intent);
        debug!(%intent, ?transition, "Intent handled");
        if transition == Transition::Applied && !matches!(intent, Intent::ToggleSort) {
            self.selected_step = self.engine.current_step();
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let moves = self.engine.list_moves();
        let row = self.selected_row();
        let next = match key {
            KeyCode::Up => row.saturating_sub(1),
            KeyCode::Down => (row + 1).min(moves.len() - 1),
            _ => row,
        };
        if let Some(entry) = moves.get(next) {
            self.selected_step = *entry.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_timetravel::{DisplayOrder, GameStatus, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(GameEngine::new());
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.engine().current_step(), 1);
        assert_eq!(app.engine().history().entries()[1].played(), Some(Position::TopLeft));
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_digits_click_cells() {
        let mut app = App::new(GameEngine::new());
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5'), KeyCode::Char('1')]);
        // Second '5' hits an occupied square and is ignored.
        assert_eq!(app.engine().history().len(), 3);
        assert_eq!(app.engine().status(), GameStatus::NextPlayer(Player::X));
    }

    #[test]
    fn test_move_list_jump() {
        let mut app = App::new(GameEngine::replay(&[0, 4, 8]));
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.engine().current_step(), 1);
        assert_eq!(app.engine().history().len(), 4);
    }

    #[test]
    fn test_selection_follows_sort_order() {
        let mut app = App::new(GameEngine::replay(&[0, 4]));
        press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(app.engine().display_order(), DisplayOrder::Ascending);
        // Latest step is listed first once ascending.
        assert_eq!(app.selected_step(), 2);
        assert_eq!(app.selected_row(), 0);
        press(&mut app, &[KeyCode::Tab, KeyCode::Down]);
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut app = App::new(GameEngine::replay(&[0]));
        press(&mut app, &[KeyCode::Tab, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.selected_step(), 1);
        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Up]);
        assert_eq!(app.selected_step(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(GameEngine::new());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_space_plays_and_other_chars_ignored() {
        let mut app = App::new(GameEngine::new());
        press(&mut app, &[KeyCode::Char('0'), KeyCode::Char('x')]);
        assert_eq!(app.engine().history().len(), 1);

        press(&mut app, &[KeyCode::Char(' ')]);
        assert_eq!(app.engine().current_step(), 1);
        assert_eq!(app.engine().history().entries()[1].played(), Some(Position::Center));
    }
}
