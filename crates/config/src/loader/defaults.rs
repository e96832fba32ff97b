//! Resolved manual configuration and its defaults.
//!
//! Responsibilities:
//! - Define `ManualConfig`, the fully resolved startup configuration.
//! - Provide a Default implementation built from `constants`.
//!
//! Does NOT handle:
//! - Reading values from the environment or `.env` (see `env.rs`, `builder.rs`).
//!
//! Invariants:
//! - Defaults are: theme "Gruvbox", first page, 2000 ms hints, intro shown.

use std::time::Duration;

use crate::constants::DEFAULT_HINT_TTL_MS;
use crate::types::{ActiveTheme, Page};

/// Startup configuration after merging all sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualConfig {
    /// Theme applied at startup.
    pub theme: ActiveTheme,
    /// Page shown once the intro is dismissed.
    pub start_page: Page,
    /// How long a simulator hint stays visible.
    pub hint_ttl: Duration,
    /// Skip the intro splash.
    pub skip_intro: bool,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            theme: ActiveTheme::default(),
            start_page: Page::default(),
            hint_ttl: Duration::from_millis(DEFAULT_HINT_TTL_MS),
            skip_intro: false,
        }
    }
}
