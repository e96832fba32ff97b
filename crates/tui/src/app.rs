//! Application state and rendering.
//!
//! This module contains the main application state, input handling,
//! and rendering logic for the manual.
//!
//! The module is organized into submodules:
//! - `state`: Core state types (InputMode, HitMap, layout constants)
//! - `core`: Construction from resolved configuration
//! - `input`: Search box entry and simulator key forwarding
//! - `mouse`: Mouse event handling
//! - `actions`: Action handling
//! - `render`: Rendering logic

pub mod state;

mod actions;
mod core;
mod input;
mod mouse;
mod render;

pub use state::{ClickTarget, FOOTER_HEIGHT, HEADER_HEIGHT, HitMap, InputMode, SIDEBAR_WIDTH};

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use omarchy_config::{ActiveTheme, Page};
use omarchy_engine::{CategoryFilter, HintId, WorkspaceSimulator};
use ratatui::layout::Rect;

use crate::action::Action;

/// Main application state.
pub struct App {
    pub page: Page,
    pub theme: ActiveTheme,
    pub simulator: WorkspaceSimulator,

    // Keybind search
    pub search_query: String,
    pub category: CategoryFilter,
    pub input_mode: InputMode,

    // Chrome
    pub show_intro: bool,
    pub show_sidebar: bool,
    pub show_help: bool,
    /// Scroll offset of the current page, in page-specific units.
    pub scroll: usize,

    /// How long a simulator hint stays visible.
    pub hint_ttl: Duration,
    /// Hint id whose expiry timer has already been requested.
    scheduled_hint: Option<HintId>,

    /// Last rendered frame area, for mouse handling.
    pub last_area: Rect,
    /// Area the current page was drawn into, for scroll limits.
    pub content_area: Rect,
    /// Click regions from the last render.
    pub hit_map: HitMap,
}

impl App {
    /// Handle keyboard input - returns Action if one should be dispatched.
    ///
    /// Key releases only matter to the engaged simulator; everywhere else
    /// they are dropped.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if self.show_intro {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            return match key.code {
                KeyCode::Enter => Some(Action::DismissIntro),
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::Quit)
                }
                _ => None,
            };
        }

        if self.simulator.is_engaged() {
            return self.handle_simulator_input(key);
        }

        if key.kind == KeyEventKind::Release {
            return None;
        }

        if self.show_help {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                    Some(Action::CloseHelp)
                }
                _ => None,
            };
        }

        if self.input_mode == InputMode::Search {
            return self.handle_search_input(key);
        }

        crate::input::keymap::resolve_action(self.page, key)
    }

    /// Returns the visible hint's id and lifetime if its expiry timer has
    /// not been requested yet.
    ///
    /// The runtime calls this after every action and spawns one timer per
    /// returned id.
    pub fn take_hint_timer(&mut self) -> Option<(HintId, Duration)> {
        let id = self.simulator.current_hint()?.id;
        if self.scheduled_hint == Some(id) {
            return None;
        }
        self.scheduled_hint = Some(id);
        Some((id, self.hint_ttl))
    }

    /// Keybinds matching the current search box and category.
    pub fn visible_keybinds(&self) -> Vec<&'static omarchy_engine::Keybind> {
        omarchy_engine::filter(omarchy_engine::KEYBINDS, &self.search_query, self.category)
    }
}
