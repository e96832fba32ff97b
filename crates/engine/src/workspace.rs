//! Simulated tiling workspace.
//!
//! Responsibilities:
//! - Own the workspace state (windows, layout, focus) and mutate it through
//!   named operations.
//! - Gate keyboard input behind an explicit engage/disengage pair.
//! - Emit a hint for every operation that reports back to the user.
//! - Track held keys for display.
//!
//! Does NOT handle:
//! - Hint expiry timing (callers invoke `expire_hint` when their timer fires).
//! - Rendering or terminal events.
//!
//! Invariants:
//! - `windows.len() <= MAX_WINDOWS`.
//! - `active_window_id` is `None` iff `windows` is empty, or names a member
//!   of `windows`.
//! - While disengaged, `handle_key` changes nothing and emits no hint.
//! - Every operation is total; declines are reported through hint text.

use crate::chord::{
    self, ChordKey, Command, FocusDirection, KeyInput, KeyOutcome, KeyPhase, Modifiers,
};
use crate::hint::{Hint, HintId, HintSlot};
use crate::window::{Window, WindowId, WindowKind};

/// Maximum number of simultaneously open windows.
pub const MAX_WINDOWS: usize = 6;

/// Tiling split orientation applied to every window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
}

impl Layout {
    pub fn toggled(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
        }
    }
}

/// Read-only view of the simulated workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceState {
    windows: Vec<Window>,
    layout: Layout,
    active_window_id: Option<WindowId>,
}

impl WorkspaceState {
    /// Windows in tiling (and focus-cycle) order.
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.active_window_id
    }

    pub fn active_window(&self) -> Option<&Window> {
        let id = self.active_window_id?;
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn active_index(&self) -> Option<usize> {
        let id = self.active_window_id?;
        self.windows.iter().position(|w| w.id == id)
    }
}

/// The workspace state machine.
#[derive(Debug)]
pub struct WorkspaceSimulator {
    state: WorkspaceState,
    next_id: u64,
    hint: HintSlot,
    engaged: bool,
    held_keys: Vec<ChordKey>,
    held_modifiers: Modifiers,
}

impl Default for WorkspaceSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceSimulator {
    /// Creates an empty, disengaged simulator.
    pub fn new() -> Self {
        Self {
            state: WorkspaceState::default(),
            next_id: 1,
            hint: HintSlot::default(),
            engaged: false,
            held_keys: Vec::new(),
            held_modifiers: Modifiers::empty(),
        }
    }

    /// Creates the demo session shown when the manual opens:
    /// Firefox and Alacritty side by side, Alacritty focused.
    pub fn with_demo_windows() -> Self {
        let mut sim = Self::new();
        sim.push_window(WindowKind::Browser);
        let terminal = sim.push_window(WindowKind::Terminal);
        sim.state.active_window_id = Some(terminal);
        sim
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn current_hint(&self) -> Option<&Hint> {
        self.hint.current()
    }

    /// Clears the hint if `id` is still the visible one.
    ///
    /// Timers for superseded hints call this with a stale id and are ignored.
    pub fn expire_hint(&mut self, id: HintId) -> bool {
        self.hint.expire(id)
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Starts accepting keyboard chords.
    pub fn engage(&mut self) {
        if !self.engaged {
            tracing::debug!("Simulator engaged");
        }
        self.engaged = true;
    }

    /// Stops accepting keyboard chords and forgets held keys.
    pub fn disengage(&mut self) {
        if self.engaged {
            tracing::debug!("Simulator disengaged");
        }
        self.engaged = false;
        self.held_keys.clear();
        self.held_modifiers = Modifiers::empty();
    }

    /// Keys currently held down, in press order. Display only.
    pub fn held_keys(&self) -> &[ChordKey] {
        &self.held_keys
    }

    /// Modifiers reported with the most recent key event. Display only.
    pub fn held_modifiers(&self) -> Modifiers {
        self.held_modifiers
    }

    /// Feeds one key event through the engagement gate and chord table.
    pub fn handle_key(&mut self, input: KeyInput) -> KeyOutcome {
        let key = normalize(input.key);
        match input.phase {
            KeyPhase::Release => {
                self.held_keys.retain(|k| *k != key);
                if self.engaged {
                    self.held_modifiers = input.modifiers;
                }
                return KeyOutcome::Ignored;
            }
            KeyPhase::Press => {
                if !self.engaged {
                    return KeyOutcome::Ignored;
                }
                if !self.held_keys.contains(&key) {
                    self.held_keys.push(key);
                }
                self.held_modifiers = input.modifiers;
            }
        }

        if !input.modifiers.has_chord_modifier() {
            return KeyOutcome::Ignored;
        }

        match chord::interpret(&input) {
            Some(command) => {
                self.apply(command);
                KeyOutcome::Applied(command)
            }
            None => {
                tracing::trace!(?input, "Unmapped chord swallowed");
                KeyOutcome::Swallowed
            }
        }
    }

    /// Runs a command directly, bypassing the engagement gate.
    ///
    /// Used by on-screen controls; keyboard input goes through `handle_key`.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Open(kind) => self.open_window(kind),
            Command::CloseActive => self.close_active_window(),
            Command::ExitSession => self.exit_session(),
            Command::ToggleLayout => self.toggle_layout(),
            Command::CycleFocus(direction) => self.cycle_focus(direction),
            Command::Swap => self.swap_window(),
        }
    }

    pub fn open_window(&mut self, kind: WindowKind) {
        if self.state.windows.len() >= MAX_WINDOWS {
            tracing::debug!(kind = %kind, "Open declined: workspace full");
            self.hint.issue("Max windows reached!");
            return;
        }
        let id = self.push_window(kind);
        self.state.active_window_id = Some(id);
        tracing::debug!(window = %id, kind = %kind, count = self.state.windows.len(), "Opened window");
        self.hint.issue(format!("Opened {}", kind.title()));
    }

    pub fn close_active_window(&mut self) {
        let Some(active) = self.state.active_window_id else {
            let text = if self.state.windows.is_empty() {
                "Already empty!"
            } else {
                "No active window"
            };
            tracing::debug!(reason = text, "Close declined");
            self.hint.issue(text);
            return;
        };

        self.state.windows.retain(|w| w.id != active);
        self.state.active_window_id = self.state.windows.last().map(|w| w.id);
        tracing::debug!(window = %active, remaining = self.state.windows.len(), "Closed window");
        self.hint.issue("Window Closed (Super+W)");
    }

    pub fn exit_session(&mut self) {
        let closed = self.state.windows.len();
        self.state.windows.clear();
        self.state.active_window_id = None;
        tracing::debug!(closed, "Session reset");
        self.hint.issue("Session Reset (Super+Shift+Q)");
    }

    pub fn toggle_layout(&mut self) {
        let layout = self.state.layout.toggled();
        self.state.layout = layout;
        tracing::debug!(layout = layout.label(), "Layout toggled");
        self.hint.issue(format!("Layout: {} (Super+J)", layout.label()));
    }

    pub fn cycle_focus(&mut self, direction: FocusDirection) {
        let len = self.state.windows.len();
        if len < 2 {
            return;
        }
        let next = match (self.state.active_index(), direction) {
            (Some(i), FocusDirection::Next) => (i + 1) % len,
            (Some(i), FocusDirection::Prev) => (i + len - 1) % len,
            (None, FocusDirection::Next) => 0,
            (None, FocusDirection::Prev) => len - 1,
        };
        let id = self.state.windows[next].id;
        self.state.active_window_id = Some(id);
        tracing::trace!(window = %id, ?direction, "Focus moved");
    }

    pub fn swap_window(&mut self) {
        let len = self.state.windows.len();
        if len < 2 {
            return;
        }
        let Some(i) = self.state.active_index() else {
            return;
        };
        let j = (i + 1) % len;
        self.state.windows.swap(i, j);
        tracing::debug!(from = i, to = j, "Swapped windows");
        self.hint.issue("Swapped Windows");
    }

    /// Focuses a window by id (mouse click). Unknown ids are ignored.
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        if self.state.windows.iter().any(|w| w.id == id) {
            self.state.active_window_id = Some(id);
            true
        } else {
            tracing::debug!(window = %id, "Focus request for unknown window ignored");
            false
        }
    }

    fn push_window(&mut self, kind: WindowKind) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.state.windows.push(Window::new(id, kind));
        id
    }
}

fn normalize(key: ChordKey) -> ChordKey {
    match key {
        ChordKey::Char(c) => ChordKey::Char(c.to_ascii_uppercase()),
        other => other,
    }
}
