//! Action protocol for the manual's event loop.
//!
//! Actions flow from the input task, the mouse handler, and hint timers to
//! the main loop, where `App::update` applies them.
//!
//! Does NOT handle:
//! - Action handling logic (see `app::actions`).
//! - Spawning timers (see `runtime::hints`).

use crossterm::event::{KeyEvent, MouseEvent};
use omarchy_config::Page;
use omarchy_engine::{CategoryFilter, Command, HintId, WindowId};

/// Unified action type for the manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Periodic UI tick
    Tick,
    /// Terminal resized to (width, height)
    Resize(u16, u16),

    // Raw input
    /// Keyboard event (press or release)
    Input(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),

    // Shell navigation
    /// Leave the intro splash
    DismissIntro,
    NextPage,
    PreviousPage,
    GoToPage(Page),
    ToggleSidebar,
    ScrollUp,
    ScrollDown,
    OpenHelp,
    CloseHelp,

    // Themes
    NextTheme,
    PreviousTheme,
    /// Apply the theme at this gallery index
    SelectTheme(usize),
    /// Re-apply the theme under the gallery cursor
    ApplyTheme,

    // Keybind search
    NextCategory,
    PreviousCategory,
    SelectCategory(CategoryFilter),
    FocusSearch,
    LeaveSearch,
    ClearSearch,
    SearchInput(char),
    SearchBackspace,

    // Workspace simulator
    EngageSimulator,
    DisengageSimulator,
    /// Run a simulator command from an on-screen control
    Simulate(Command),
    /// Focus a window by clicking its tile
    FocusWindow(WindowId),
    /// A hint's lifetime elapsed
    HintExpired(HintId),
}

impl Action {
    /// Whether this action may be dropped under channel backpressure.
    pub fn is_droppable(&self) -> bool {
        matches!(self, Self::Mouse(_) | Self::Tick)
    }
}
