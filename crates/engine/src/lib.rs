//! Omarchy manual engine.
//!
//! This crate holds the domain core of the manual: the simulated tiling
//! workspace, keyboard chord interpretation, transient hints, and the
//! static keybind catalog with its filter. It has no terminal dependencies;
//! the TUI crate maps its own input events onto [`KeyInput`] and renders the
//! read-only state exposed here.
//!
//! # Example
//!
//! ```rust
//! use omarchy_engine::{ChordKey, KeyInput, Modifiers, WorkspaceSimulator};
//!
//! let mut sim = WorkspaceSimulator::new();
//! sim.engage();
//! sim.handle_key(KeyInput::press(ChordKey::Enter, Modifiers::SUPER));
//! assert_eq!(sim.state().windows().len(), 1);
//! assert_eq!(sim.current_hint().map(|h| h.text.as_str()), Some("Opened Alacritty"));
//! ```

pub mod catalog;
pub mod chord;
pub mod error;
pub mod filter;
pub mod hint;
pub mod hotkeys;
pub mod window;
pub mod workspace;

pub use catalog::{Category, KEYBINDS, Keybind};
pub use chord::{ChordKey, Command, FocusDirection, KeyInput, KeyOutcome, KeyPhase, Modifiers};
pub use error::ParseError;
pub use filter::{CategoryFilter, filter};
pub use hint::{Hint, HintId};
pub use hotkeys::{HotkeyItem, HotkeySection, MANUAL_HOTKEYS};
pub use window::{Window, WindowId, WindowKind};
pub use workspace::{Layout, MAX_WINDOWS, WorkspaceSimulator, WorkspaceState};
