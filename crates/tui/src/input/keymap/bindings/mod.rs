//! Keybinding definitions grouped by scope.
//!
//! Responsibilities:
//! - Provide ordered keybinding groups for the keymap resolver.
//!
//! Does NOT handle:
//! - Resolving input events into Actions.
//! - Rendering help content.
//!
//! Invariants:
//! - Binding order is stable for deterministic help output.
//! - Page-scoped bindings come first so they shadow global ones.

mod global;
mod pages;
mod simulator;

use super::Keybinding;

pub(super) fn all() -> Vec<Keybinding> {
    let mut bindings = Vec::new();
    bindings.extend(pages::bindings());
    bindings.extend(global::bindings());
    bindings.extend(simulator::bindings());
    bindings
}
