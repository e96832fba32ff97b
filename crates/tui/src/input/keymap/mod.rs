//! Centralized keybinding catalog and input resolver.
//!
//! Responsibilities:
//! - Define a single source of truth for keybindings and their descriptions.
//! - Resolve KeyEvents into Actions without mutating App state.
//!
//! Non-responsibilities:
//! - Performing App state mutations or side effects.
//! - Handling text entry or the engaged simulator (those remain in App input handlers).
//!
//! Invariants:
//! - Bindings are deterministic and stable for help rendering.
//! - Resolver never mutates App state and returns at most one Action.
//! - Shift is ignored for character keys; the character itself carries case.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use omarchy_config::Page;

use crate::action::Action;

mod bindings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Section {
    Global,
    Navigation,
    Search,
    Simulator,
    Themes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingScope {
    Global,
    Page(Page),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
}

#[derive(Clone)]
pub(crate) struct Keybinding {
    pub(crate) section: Section,
    pub(crate) keys: &'static str,
    pub(crate) description: &'static str,
    pub(crate) scope: BindingScope,
    pub(crate) matcher: Option<Matcher>,
    pub(crate) action: Option<Action>,
    pub(crate) handles_input: bool,
}

impl Keybinding {
    fn matches(&self, key: KeyEvent, page: Page) -> bool {
        if !self.scope_applies(page) {
            return false;
        }
        let Some(matcher) = self.matcher else {
            return false;
        };
        match matcher {
            Matcher::Key { code, modifiers } => {
                key.code == code && normalized_modifiers(key) == modifiers
            }
        }
    }

    fn scope_applies(&self, page: Page) -> bool {
        match self.scope {
            BindingScope::Global => true,
            BindingScope::Page(p) => p == page,
        }
    }
}

/// Modifiers with Shift dropped where the key code already encodes it.
fn normalized_modifiers(key: KeyEvent) -> KeyModifiers {
    match key.code {
        KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    }
}

/// Help sections in display order.
pub(crate) fn sections_in_order() -> &'static [Section] {
    &[
        Section::Global,
        Section::Navigation,
        Section::Search,
        Section::Simulator,
        Section::Themes,
    ]
}

pub(crate) fn keybindings() -> Vec<Keybinding> {
    bindings::all()
}

pub(crate) fn resolve_action(page: Page, key: KeyEvent) -> Option<Action> {
    for binding in keybindings() {
        if !binding.handles_input {
            continue;
        }
        if binding.matches(key, page) {
            return binding.action;
        }
    }
    None
}
