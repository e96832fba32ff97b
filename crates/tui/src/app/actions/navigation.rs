//! Navigation action handlers.
//!
//! Responsibilities:
//! - Handle page switching (NextPage, PreviousPage, GoToPage)
//! - Handle intro, sidebar, and help visibility
//! - Handle scrolling of the current page

use omarchy_config::Page;
use omarchy_engine::MANUAL_HOTKEYS;

use crate::action::Action;
use crate::app::{App, InputMode};
use crate::ui::screens::{getting_started, navigation};

impl App {
    /// Handle navigation-related actions.
    pub fn handle_navigation_action(&mut self, action: Action) {
        match action {
            Action::DismissIntro => {
                self.show_intro = false;
            }
            Action::NextPage => self.go_to_page(self.page.next()),
            Action::PreviousPage => self.go_to_page(self.page.previous()),
            Action::GoToPage(page) => self.go_to_page(page),
            Action::ToggleSidebar => {
                self.show_sidebar = !self.show_sidebar;
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::ScrollDown => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
            }
            Action::OpenHelp => {
                self.show_help = true;
            }
            Action::CloseHelp => {
                self.show_help = false;
            }
            _ => {}
        }
    }

    pub(super) fn go_to_page(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        tracing::debug!(from = %self.page, to = %page, "Switching page");
        self.page = page;
        self.scroll = 0;
        self.input_mode = InputMode::Normal;
        if page != Page::Navigation {
            self.simulator.disengage();
        }
    }

    /// Largest scroll offset for the current page.
    pub fn max_scroll(&self) -> usize {
        let width = self.content_area.width;
        match self.page {
            Page::GettingStarted => getting_started::line_count(width).saturating_sub(1),
            Page::Navigation => {
                let columns = navigation::card_columns(width);
                self.visible_keybinds().len().div_ceil(columns).saturating_sub(1)
            }
            Page::Themes => 0,
            Page::Hotkeys => MANUAL_HOTKEYS.len().saturating_sub(1),
        }
    }
}
