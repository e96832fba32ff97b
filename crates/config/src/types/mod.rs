//! Configuration type definitions for the Omarchy manual.
//!
//! Responsibilities:
//! - Define the theme registry and the active-theme selector.
//! - Define the manual's pages.
//!
//! Does NOT handle:
//! - Loading configuration from the environment (see `loader` module).
//! - Rendering (see TUI crate).

mod page;
mod theme;

pub use page::Page;
pub use theme::{ActiveTheme, Palette, THEMES, ThemeDef, find_theme};
