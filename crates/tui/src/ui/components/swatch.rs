//! Palette swatch: one chip per color role.

use omarchy_config::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

const CHIP: &str = "██";

pub struct Swatch {
    palette: Palette,
}

impl Swatch {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Columns needed to show every chip.
    pub fn width() -> u16 {
        9 * 3 - 1
    }
}

impl Widget for Swatch {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let colors = [
            p.bg, p.fg, p.accent, p.green, p.red, p.yellow, p.purple, p.gray, p.dark,
        ];
        let mut spans = Vec::with_capacity(colors.len() * 2);
        for (i, color) in colors.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(CHIP, Style::default().fg(color)));
        }
        Line::from(spans).render(area, buf);
    }
}
