//! Centralized input/keybinding definitions for the manual.
//!
//! Responsibilities:
//! - Define the shared keybinding catalog used by input resolution and the help popup.
//! - Provide deterministic rendering helpers for help output.
//!
//! Non-responsibilities:
//! - Mutating application state directly (handled by App via Actions).
//! - Translating keys for the workspace simulator (see `app::input`).
//!
//! Invariants:
//! - Keybinding metadata must remain the single source of truth for help.
//! - Input resolution must return Actions only and never mutate App state.

pub mod help;
pub mod keymap;
