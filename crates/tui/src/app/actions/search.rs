//! Search box and category filter handlers.
//!
//! Invariants:
//! - Any change to the query or category resets the card scroll.

use crate::action::Action;
use crate::app::{App, InputMode};

impl App {
    pub fn handle_search_action(&mut self, action: Action) {
        match action {
            Action::NextCategory => self.set_category(self.category.cycle_next()),
            Action::PreviousCategory => self.set_category(self.category.cycle_previous()),
            Action::SelectCategory(category) => self.set_category(category),
            Action::FocusSearch => {
                self.simulator.disengage();
                self.input_mode = InputMode::Search;
            }
            Action::LeaveSearch => {
                self.input_mode = InputMode::Normal;
            }
            Action::ClearSearch => {
                self.search_query.clear();
                self.scroll = 0;
            }
            Action::SearchInput(c) => {
                self.search_query.push(c);
                self.scroll = 0;
            }
            Action::SearchBackspace => {
                self.search_query.pop();
                self.scroll = 0;
            }
            _ => {}
        }
    }

    fn set_category(&mut self, category: omarchy_engine::CategoryFilter) {
        if category != self.category {
            tracing::debug!(category = %category, "Category filter changed");
        }
        self.category = category;
        self.scroll = 0;
    }
}
