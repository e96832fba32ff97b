//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on application exit, even during panics.
//! - Request key release reporting from terminals that support it.
//!
//! Does NOT handle:
//! - Initial raw mode and alternate screen setup (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must be created after terminal setup is complete.
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use crossterm::{
    event::{
        DisableMouseCapture, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode, supports_keyboard_enhancement},
};

/// Flags pushed so the simulator sees key releases and bare modifiers.
pub fn keyboard_enhancement_flags() -> KeyboardEnhancementFlags {
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
}

/// Pushes the keyboard enhancement flags when the terminal supports them.
///
/// Returns whether they were pushed. Without them the simulator only sees
/// presses, so held-key feedback clears on the next chord instead.
pub fn enable_keyboard_enhancement() -> bool {
    if !matches!(supports_keyboard_enhancement(), Ok(true)) {
        tracing::info!("Terminal does not report key releases");
        return false;
    }
    match execute!(
        std::io::stdout(),
        PushKeyboardEnhancementFlags(keyboard_enhancement_flags())
    ) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to enable keyboard enhancement");
            false
        }
    }
}

/// Guard that ensures terminal state is restored on drop.
///
/// # Invariants
/// - Must be created after terminal setup is complete
/// - Drop implementation must not panic
pub struct TerminalGuard {
    no_mouse: bool,
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    /// Create a new terminal guard.
    ///
    /// # Arguments
    /// * `no_mouse` - Whether mouse capture was disabled during setup
    /// * `keyboard_enhanced` - Whether enhancement flags were pushed
    pub fn new(no_mouse: bool, keyboard_enhanced: bool) -> Self {
        Self {
            no_mouse,
            keyboard_enhanced,
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: this runs during unwinding too.
        let mut stdout = std::io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}
