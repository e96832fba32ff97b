//! Global keybindings.
//!
//! Responsibilities:
//! - Define page navigation, theme cycling, category cycling, and quit.
//!
//! Non-responsibilities:
//! - Handling input resolution or application state updates.
//!
//! Invariants:
//! - Ordering matches the rendered help expectations.

use crossterm::event::{KeyCode, KeyModifiers};
use omarchy_config::Page;

use crate::action::Action;

use super::super::{BindingScope, Keybinding, Matcher, Section};

pub(super) fn bindings() -> Vec<Keybinding> {
    vec![
        Keybinding {
            section: Section::Global,
            keys: "?",
            description: "Help",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('?'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::OpenHelp),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "q",
            description: "Quit",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::Quit),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "Ctrl+C",
            description: "Quit",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }),
            action: Some(Action::Quit),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "Tab",
            description: "Next page",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Tab,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::NextPage),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "Shift+Tab",
            description: "Previous page",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::BackTab,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::PreviousPage),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "1-4",
            description: "Jump to page",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('1'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::GoToPage(Page::GettingStarted)),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "1-4",
            description: "Jump to page",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('2'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::GoToPage(Page::Navigation)),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "1-4",
            description: "Jump to page",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('3'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::GoToPage(Page::Themes)),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "1-4",
            description: "Jump to page",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('4'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::GoToPage(Page::Hotkeys)),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "i",
            description: "Engage the workspace simulator",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('i'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::EngageSimulator),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "t",
            description: "Next theme",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('t'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::NextTheme),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "T",
            description: "Previous theme",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('T'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::PreviousTheme),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "[",
            description: "Previous category",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('['),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::PreviousCategory),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "]",
            description: "Next category",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char(']'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::NextCategory),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "Ctrl+B",
            description: "Toggle sidebar",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('b'),
                modifiers: KeyModifiers::CONTROL,
            }),
            action: Some(Action::ToggleSidebar),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "j/Down",
            description: "Scroll down",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('j'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::ScrollDown),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "j/Down",
            description: "Scroll down",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Down,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::ScrollDown),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "k/Up",
            description: "Scroll up",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('k'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::ScrollUp),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "k/Up",
            description: "Scroll up",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Up,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::ScrollUp),
            handles_input: true,
        },
    ]
}
