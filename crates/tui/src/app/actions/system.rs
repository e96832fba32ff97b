//! System action handlers.
//!
//! Responsibilities:
//! - Handle ticks and terminal resize events
//! - Handle theme cycling and gallery selection

use crate::action::Action;
use crate::app::App;

impl App {
    /// Handle system/miscellaneous actions.
    pub fn handle_system_action(&mut self, action: Action) {
        match action {
            Action::Tick => {}
            Action::Resize(width, height) => {
                self.last_area = ratatui::layout::Rect::new(0, 0, width, height);
            }
            Action::NextTheme => {
                let next = self.theme.cycle_next();
                self.theme.select(next.name());
            }
            Action::PreviousTheme => {
                let previous = self.theme.cycle_previous();
                self.theme.select(previous.name());
            }
            Action::SelectTheme(index) => {
                if !self.theme.select_index(index) {
                    tracing::warn!(index, "Theme index out of range");
                }
            }
            Action::ApplyTheme => {
                let name = self.theme.name();
                self.theme.select(name);
                tracing::info!(theme = name, "Theme applied");
            }
            _ => {}
        }
    }
}
