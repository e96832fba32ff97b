//! Mouse event handling for the manual.
//!
//! Responsibilities:
//! - Resolve left clicks against the hit map recorded by the last render
//! - Release the simulator when a click lands outside its panel
//! - Map the scroll wheel to page scrolling
//!
//! Does NOT handle:
//! - Does NOT handle keyboard input
//! - Does NOT render the UI

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::{App, ClickTarget, InputMode};

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp if !self.show_intro => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown if !self.show_intro => Some(Action::ScrollDown),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => None,
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Option<Action> {
        if self.show_intro {
            return Some(Action::DismissIntro);
        }
        if self.show_help {
            return Some(Action::CloseHelp);
        }

        let target = self.hit_map.target_at(column, row);
        if self.input_mode == InputMode::Search && target != Some(ClickTarget::SearchBox) {
            self.input_mode = InputMode::Normal;
        }
        if self.simulator.is_engaged() && !target.is_some_and(ClickTarget::is_in_simulator) {
            self.simulator.disengage();
        }

        match target? {
            ClickTarget::Page(page) => Some(Action::GoToPage(page)),
            ClickTarget::Category(category) => Some(Action::SelectCategory(category)),
            ClickTarget::SearchBox => Some(Action::FocusSearch),
            ClickTarget::Theme(index) => Some(Action::SelectTheme(index)),
            ClickTarget::SimulatorPanel => Some(Action::EngageSimulator),
            ClickTarget::SimulatorControl(command) => Some(Action::Simulate(command)),
            ClickTarget::Window(id) => Some(Action::FocusWindow(id)),
        }
    }
}
