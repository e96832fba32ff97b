//! Action handling for the manual.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//!
//! Non-responsibilities:
//! - Does NOT create Actions (handled by input handlers)
//! - Does NOT perform async operations
//!
//! This module delegates to domain-specific submodules:
//! - `navigation`: Pages, sidebar, scrolling, help, intro
//! - `search`: Search box and category filter
//! - `simulator`: Engagement, on-screen controls, hint expiry
//! - `system`: Ticks, resize, themes

use crate::action::Action;
use crate::app::App;

mod navigation;
mod search;
mod simulator;
mod system;

impl App {
    /// Turns raw terminal input into the action it triggers.
    ///
    /// Every other action passes through unchanged, so the main loop can
    /// check the result for `Quit` before calling [`App::update`].
    pub fn resolve(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Input(key) => self.handle_input(key),
            Action::Mouse(mouse) => self.handle_mouse(mouse),
            other => Some(other),
        }
    }

    /// Pure state mutation based on Action.
    ///
    /// This method delegates to domain-specific handlers based on action type.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::DismissIntro
            | Action::NextPage
            | Action::PreviousPage
            | Action::GoToPage(_)
            | Action::ToggleSidebar
            | Action::ScrollUp
            | Action::ScrollDown
            | Action::OpenHelp
            | Action::CloseHelp => {
                self.handle_navigation_action(action);
            }

            Action::NextCategory
            | Action::PreviousCategory
            | Action::SelectCategory(_)
            | Action::FocusSearch
            | Action::LeaveSearch
            | Action::ClearSearch
            | Action::SearchInput(_)
            | Action::SearchBackspace => {
                self.handle_search_action(action);
            }

            Action::EngageSimulator
            | Action::DisengageSimulator
            | Action::Simulate(_)
            | Action::FocusWindow(_)
            | Action::HintExpired(_) => {
                self.handle_simulator_action(action);
            }

            Action::Tick
            | Action::Resize(_, _)
            | Action::NextTheme
            | Action::PreviousTheme
            | Action::SelectTheme(_)
            | Action::ApplyTheme => {
                self.handle_system_action(action);
            }

            Action::Input(_) | Action::Mouse(_) => {
                if let Some(next) = self.resolve(action) {
                    self.update(next);
                }
            }

            // Quit is handled by the main loop.
            Action::Quit => {}
        }
    }
}
