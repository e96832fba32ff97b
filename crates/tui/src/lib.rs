//! Omarchy Manual TUI Library
//!
//! This library provides the application state, input handling, and UI
//! components for the interactive Omarchy manual.
//!
//! # Example
//!
//! ```rust
//! use omarchy_manual::{Action, App};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::default();
//! assert_eq!(
//!     app.handle_input(KeyEvent::from(KeyCode::Enter)),
//!     Some(Action::DismissIntro)
//! );
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod input;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, ClickTarget, FOOTER_HEIGHT, HEADER_HEIGHT, InputMode};
