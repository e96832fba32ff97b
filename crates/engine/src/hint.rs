//! Transient hint messages.
//!
//! Responsibilities:
//! - Hold at most one user-facing hint emitted by a workspace operation.
//! - Give every hint a unique identity so expiry timers can be matched.
//!
//! Does NOT handle:
//! - Scheduling expiry timers (the TUI runtime owns the clock).
//! - Rendering.
//!
//! Invariants:
//! - Issuing a hint replaces the previous one; the previous id becomes stale.
//! - `expire` only clears the slot when the id matches the current hint.

use std::fmt;
use std::time::Instant;
use uuid::Uuid;

/// Identity of one issued hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HintId(Uuid);

impl HintId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A short-lived status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub id: HintId,
    pub text: String,
    pub created_at: Instant,
}

/// Single-occupancy hint holder.
#[derive(Debug, Default)]
pub(crate) struct HintSlot {
    current: Option<Hint>,
}

impl HintSlot {
    /// Replaces any visible hint and returns the new hint's id.
    pub(crate) fn issue(&mut self, text: impl Into<String>) -> HintId {
        let hint = Hint {
            id: HintId::new(),
            text: text.into(),
            created_at: Instant::now(),
        };
        let id = hint.id;
        if let Some(previous) = self.current.replace(hint) {
            tracing::trace!(superseded = %previous.id, "Hint superseded");
        }
        id
    }

    /// Clears the hint if `id` is still current. Returns whether it cleared.
    pub(crate) fn expire(&mut self, id: HintId) -> bool {
        match &self.current {
            Some(hint) if hint.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn current(&self) -> Option<&Hint> {
        self.current.as_ref()
    }
}
