//! Application state types.
//!
//! Responsibilities:
//! - Define the text entry mode (InputMode).
//! - Define layout constants shared by rendering and mouse handling.
//! - Define the click hit map filled during render.
//!
//! Does NOT handle:
//! - State mutations (in App impl).
//! - The main App struct.

use omarchy_config::Page;
use omarchy_engine::{CategoryFilter, Command, WindowId};
use ratatui::layout::{Position, Rect};

/// Layout constants for UI components.
pub const HEADER_HEIGHT: u16 = 2;
pub const FOOTER_HEIGHT: u16 = 1;
pub const SIDEBAR_WIDTH: u16 = 26;

/// Whether keystrokes are being typed into the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Something on screen that reacts to a left click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Page(Page),
    Category(CategoryFilter),
    SearchBox,
    Theme(usize),
    /// Anywhere inside the simulator panel.
    SimulatorPanel,
    /// An on-screen chord button above the workspace.
    SimulatorControl(Command),
    Window(WindowId),
}

impl ClickTarget {
    /// Whether the target lies inside the simulator panel.
    pub fn is_in_simulator(self) -> bool {
        matches!(
            self,
            Self::SimulatorPanel | Self::SimulatorControl(_) | Self::Window(_)
        )
    }
}

/// Click regions recorded during the last render.
///
/// Later regions sit on top of earlier ones, so a tile registered after its
/// panel wins the hit test.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, ClickTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: ClickTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under the cell, if any.
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
