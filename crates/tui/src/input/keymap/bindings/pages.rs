//! Page-scoped keybindings.
//!
//! Responsibilities:
//! - Define keybind search shortcuts on the Navigation page.
//! - Define gallery browsing on the Themes page.
//! - Document the search box keys (handled by the App's text entry mode).
//!
//! Invariants:
//! - Ordering matches the rendered help expectations.

use crossterm::event::{KeyCode, KeyModifiers};
use omarchy_config::Page;

use crate::action::Action;

use super::super::{BindingScope, Keybinding, Matcher, Section};

pub(super) fn bindings() -> Vec<Keybinding> {
    vec![
        // Navigation page
        Keybinding {
            section: Section::Navigation,
            keys: "/",
            description: "Search keybinds",
            scope: BindingScope::Page(Page::Navigation),
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('/'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::FocusSearch),
            handles_input: true,
        },
        Keybinding {
            section: Section::Navigation,
            keys: "Ctrl+U",
            description: "Clear search",
            scope: BindingScope::Page(Page::Navigation),
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('u'),
                modifiers: KeyModifiers::CONTROL,
            }),
            action: Some(Action::ClearSearch),
            handles_input: true,
        },
        // Search box
        Keybinding {
            section: Section::Search,
            keys: "type",
            description: "Filter by description or keys",
            scope: BindingScope::Page(Page::Navigation),
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Search,
            keys: "Backspace",
            description: "Delete character",
            scope: BindingScope::Page(Page::Navigation),
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Search,
            keys: "Ctrl+U",
            description: "Clear search",
            scope: BindingScope::Page(Page::Navigation),
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Search,
            keys: "Enter/Esc",
            description: "Leave search",
            scope: BindingScope::Page(Page::Navigation),
            matcher: None,
            action: None,
            handles_input: false,
        },
        // Themes page
        Keybinding {
            section: Section::Themes,
            keys: "Left/Right",
            description: "Select and apply theme",
            scope: BindingScope::Page(Page::Themes),
            matcher: Some(Matcher::Key {
                code: KeyCode::Left,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::PreviousTheme),
            handles_input: true,
        },
        Keybinding {
            section: Section::Themes,
            keys: "Left/Right",
            description: "Select and apply theme",
            scope: BindingScope::Page(Page::Themes),
            matcher: Some(Matcher::Key {
                code: KeyCode::Right,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::NextTheme),
            handles_input: true,
        },
        Keybinding {
            section: Section::Themes,
            keys: "Enter",
            description: "Re-apply selected theme",
            scope: BindingScope::Page(Page::Themes),
            matcher: Some(Matcher::Key {
                code: KeyCode::Enter,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::ApplyTheme),
            handles_input: true,
        },
    ]
}
