//! Workspace simulator action handlers.
//!
//! Responsibilities:
//! - Engage and release the simulator
//! - Run on-screen control commands and tile clicks
//! - Clear hints whose timer fired
//!
//! Invariants:
//! - Engaging switches to Navigation with search and help closed.
//! - A stale hint timer never clears a newer hint.

use omarchy_config::Page;

use crate::action::Action;
use crate::app::{App, InputMode};

impl App {
    pub fn handle_simulator_action(&mut self, action: Action) {
        match action {
            Action::EngageSimulator => self.engage_simulator(),
            Action::DisengageSimulator => self.simulator.disengage(),
            Action::Simulate(command) => {
                self.engage_simulator();
                self.simulator.apply(command);
            }
            Action::FocusWindow(id) => {
                self.engage_simulator();
                if !self.simulator.focus_window(id) {
                    tracing::warn!(window = %id, "Clicked window no longer exists");
                }
            }
            Action::HintExpired(id) => {
                if !self.simulator.expire_hint(id) {
                    tracing::trace!(hint = %id, "Stale hint timer ignored");
                }
            }
            _ => {}
        }
    }

    fn engage_simulator(&mut self) {
        self.go_to_page(Page::Navigation);
        self.input_mode = InputMode::Normal;
        self.show_help = false;
        self.simulator.engage();
    }
}
