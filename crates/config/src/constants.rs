//! Centralized constants for the Omarchy manual workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Theme Defaults
// =============================================================================

/// Theme applied when neither the CLI nor the environment names one.
pub const DEFAULT_THEME: &str = "Gruvbox";

// =============================================================================
// Hint Timing
// =============================================================================

/// Default lifetime of a simulator hint in milliseconds.
pub const DEFAULT_HINT_TTL_MS: u64 = 2000;

/// Shortest accepted hint lifetime in milliseconds.
pub const MIN_HINT_TTL_MS: u64 = 100;

/// Longest accepted hint lifetime in milliseconds (1 minute).
pub const MAX_HINT_TTL_MS: u64 = 60_000;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// File name (inside the log directory) for the rolling log file.
pub const LOG_FILE_NAME: &str = "omarchy-manual.log";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_THEME: &str = "OMARCHY_MANUAL_THEME";
pub const ENV_PAGE: &str = "OMARCHY_MANUAL_PAGE";
pub const ENV_HINT_TTL_MS: &str = "OMARCHY_MANUAL_HINT_TTL_MS";
pub const ENV_SKIP_INTRO: &str = "OMARCHY_MANUAL_SKIP_INTRO";
