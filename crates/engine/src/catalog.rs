//! Static keybind catalog.
//!
//! Responsibilities:
//! - Define keybind categories and the catalog entry type.
//! - Provide the catalog shown as cards on the Navigation page.
//!
//! Does NOT handle:
//! - Filtering (see `filter`).
//! - The long-form hotkey tables (see `hotkeys`).
//!
//! Invariants:
//! - Catalog order is the display order and is stable.
//! - Keybind ids are unique.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Keybind category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Navigation,
    WindowOps,
    Launchers,
    Groups,
    Scratchpad,
}

impl Category {
    /// All categories in sidebar order.
    pub const ALL: [Category; 5] = [
        Category::Navigation,
        Category::WindowOps,
        Category::Launchers,
        Category::Groups,
        Category::Scratchpad,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::WindowOps => "Window Operations",
            Self::Launchers => "Launchers",
            Self::Groups => "Groups",
            Self::Scratchpad => "Scratchpad",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

/// One keybind card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybind {
    pub id: &'static str,
    pub keys: &'static [&'static str],
    pub description: &'static str,
    pub category: Category,
    pub long_description: Option<&'static str>,
}

impl Keybind {
    /// Key labels joined with single spaces, as searched by the filter.
    pub fn joined_keys(&self) -> String {
        self.keys.join(" ")
    }
}

const fn bind(
    id: &'static str,
    keys: &'static [&'static str],
    description: &'static str,
    category: Category,
    long_description: &'static str,
) -> Keybind {
    Keybind {
        id,
        keys,
        description,
        category,
        long_description: Some(long_description),
    }
}

/// The keybind catalog.
pub static KEYBINDS: &[Keybind] = &[
    // Launchers
    bind(
        "launcher",
        &["Super", "Space"],
        "Application Launcher",
        Category::Launchers,
        "Reveals the application launcher to start apps.",
    ),
    bind(
        "menu",
        &["Super", "Alt", "Space"],
        "Omarchy Menu",
        Category::Launchers,
        "Opens the main Omarchy system menu.",
    ),
    bind(
        "theme_selector",
        &["Super", "Ctrl", "Shift", "Space"],
        "Theme Selector",
        Category::Launchers,
        "Opens the direct theme selection menu.",
    ),
    bind(
        "term",
        &["Super", "Enter"],
        "Open Terminal",
        Category::Launchers,
        "Spawns a new terminal window instantly.",
    ),
    bind(
        "browser",
        &["Super", "Shift", "B"],
        "Open Browser",
        Category::Launchers,
        "Launches your default web browser.",
    ),
    bind(
        "monitor",
        &["Super", "Shift", "T"],
        "Activity Monitor",
        Category::Launchers,
        "Opens the system activity monitor.",
    ),
    bind(
        "files",
        &["Super", "Shift", "F"],
        "File Manager",
        Category::Launchers,
        "Opens the file explorer.",
    ),
    // Window operations
    bind(
        "close",
        &["Super", "W"],
        "Close Window",
        Category::WindowOps,
        "Closes the currently focused window.",
    ),
    bind(
        "float",
        &["Super", "T"],
        "Toggle Float",
        Category::WindowOps,
        "Toggles the window between tiling and floating mode.",
    ),
    bind(
        "fullscreen",
        &["Super", "F"],
        "Fullscreen",
        Category::WindowOps,
        "Toggles true fullscreen mode.",
    ),
    bind(
        "fullwidth",
        &["Super", "Alt", "F"],
        "Fullwidth",
        Category::WindowOps,
        "Maximizes window width but keeps the top bar.",
    ),
    bind(
        "toggle_layout",
        &["Super", "J"],
        "Toggle Split",
        Category::WindowOps,
        "Toggles between vertical and horizontal stacking.",
    ),
    bind(
        "swap",
        &["Super", "Shift", "Arrow"],
        "Swap Window",
        Category::WindowOps,
        "Swaps the position of the current window with its neighbor.",
    ),
    bind(
        "move",
        &["Super", "Click"],
        "Move Window",
        Category::WindowOps,
        "Hold Super and left-click drag to move a window.",
    ),
    bind(
        "resize",
        &["Super", "R-Click"],
        "Resize Window",
        Category::WindowOps,
        "Hold Super and right-click drag to resize a window.",
    ),
    // Navigation
    bind(
        "focus",
        &["Super", "Arrow"],
        "Move Focus",
        Category::Navigation,
        "Moves focus to the window in the specified direction.",
    ),
    bind(
        "move_ws",
        &["Super", "Shift", "1-9"],
        "Move to Workspace",
        Category::Navigation,
        "Moves the active window to the specified workspace number.",
    ),
    bind(
        "rotate_bg",
        &["Super", "Ctrl", "Space"],
        "Rotate Background",
        Category::Navigation,
        "Cycles through the available background images for the current theme.",
    ),
    // Groups
    bind(
        "group",
        &["Super", "G"],
        "Toggle Group",
        Category::Groups,
        "Groups current windows or disassembles the group.",
    ),
    bind(
        "nav_group",
        &["Super", "Alt", "Arrow"],
        "Navigate Group",
        Category::Groups,
        "Switch focus between windows inside a group.",
    ),
    bind(
        "move_out_group",
        &["Super", "Alt", "G"],
        "Eject from Group",
        Category::Groups,
        "Moves the current window out of the group.",
    ),
    // Scratchpad
    bind(
        "toggle_scratch",
        &["Super", "S"],
        "Toggle Scratchpad",
        Category::Scratchpad,
        "Shows or hides the special scratchpad overlay.",
    ),
    bind(
        "move_scratch",
        &["Super", "Alt", "S"],
        "Move to Scratchpad",
        Category::Scratchpad,
        "Sends the current window to the scratchpad.",
    ),
];
