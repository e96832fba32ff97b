//! TUI-specific theme helpers and style builders.
//!
//! This module extends `omarchy_config::Palette` with ergonomic helpers
//! for building ratatui `Style` objects consistently across the TUI.

use omarchy_config::Palette;
use ratatui::style::{Modifier, Style};

/// Trait extending Palette with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Base surface: foreground on background.
    fn base(&self) -> Style;
    /// Get the base text style.
    fn text(&self) -> Style;
    /// Get dimmed text style.
    fn text_dim(&self) -> Style;
    /// Get title style (accent + bold).
    fn title(&self) -> Style;
    /// Get border style.
    fn border(&self) -> Style;
    /// Get border style when focused.
    fn border_focused(&self) -> Style;
    /// Get highlight/selection style.
    fn highlight(&self) -> Style;
    /// Raised surface (panels, status bars, cards).
    fn surface(&self) -> Style;
    fn success(&self) -> Style;
    fn warning(&self) -> Style;
    fn error(&self) -> Style;
    /// Secondary accent used for key caps.
    fn keycap(&self) -> Style;
    /// Get table header style.
    fn table_header(&self) -> Style;
}

impl ThemeExt for Palette {
    fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.gray)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.gray)
    }

    fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn surface(&self) -> Style {
        Style::default().fg(self.fg).bg(self.dark)
    }

    fn success(&self) -> Style {
        Style::default().fg(self.green)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.yellow)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.red)
    }

    fn keycap(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.dark)
            .add_modifier(Modifier::BOLD)
    }

    fn table_header(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.dark)
            .add_modifier(Modifier::BOLD)
    }
}
