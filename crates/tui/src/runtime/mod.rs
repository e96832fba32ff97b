//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard, keyboard enhancement)
//! - Configuration resolution from CLI, environment, and `.env`
//! - Hint expiry timers
//! - The per-action main-loop step
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `omarchy_manual::app` and `omarchy_manual::ui`).
//! - Simulator semantics (see `omarchy_engine`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.
//! - Timers run as tracked tokio tasks and stop on cancellation.

pub mod config;
pub mod dispatch;
pub mod hints;
pub mod terminal;
