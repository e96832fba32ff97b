//! Search box text entry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;

impl App {
    /// Handle keys while the search box has focus.
    pub(crate) fn handle_search_input(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(Action::Quit),
            KeyCode::Char('u') if ctrl => Some(Action::ClearSearch),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Esc | KeyCode::Enter => Some(Action::LeaveSearch),
            _ => None,
        }
    }
}
