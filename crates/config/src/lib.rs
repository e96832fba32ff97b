//! Configuration for the Omarchy manual.
//!
//! This crate provides the theme registry, the manual's page list, shared
//! constants, and the loader that resolves startup settings from `.env`,
//! environment variables, and command-line values.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, ManualConfig, env_var_or_none};
pub use types::{ActiveTheme, Page, Palette, THEMES, ThemeDef, find_theme};
