//! UI rendering modules for the manual.
//!
//! This module contains page-specific rendering logic that is separated
//! from the main app state management.

pub mod components;
pub mod hint;
pub mod keycap;
pub mod popup;
pub mod screens;
pub mod sidebar;
pub mod theme;
