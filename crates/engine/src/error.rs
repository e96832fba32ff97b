//! Error types for the engine crate.
//!
//! Responsibilities:
//! - Report failures to parse user-supplied names (window kinds, categories).
//!
//! Does NOT handle:
//! - Workspace operations. Those are total and report declines through hints.
//!
//! Invariants:
//! - Every variant carries the rejected input for display.

use thiserror::Error;

/// Errors produced when parsing names into engine enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown window kind: '{0}' (expected terminal, browser, files, or monitor)")]
    UnknownWindowKind(String),

    #[error("Unknown keybind category: '{0}'")]
    UnknownCategory(String),
}
