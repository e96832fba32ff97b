//! Big text widget for the intro splash.
//!
//! A wrapper around `tui-big-text` that keeps the manual's palette.
//!
//! # Example
//!
//! ```rust,ignore
//! use omarchy_manual::ui::components::BigTextWidget;
//!
//! let splash = BigTextWidget::header("OMARCHY").color(palette.accent);
//! frame.render_widget(splash, area);
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Widget,
};
use tui_big_text::{BigText, PixelSize};

/// Block-letter text in one color.
#[derive(Debug, Clone)]
pub struct BigTextWidget {
    lines: Vec<String>,
    pixel_size: PixelSize,
    fg: Color,
    alignment: Alignment,
}

impl BigTextWidget {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            pixel_size: PixelSize::Full,
            fg: Color::Reset,
            alignment: Alignment::Center,
        }
    }

    /// Centered, half-height heading sized for an 80-column terminal.
    pub fn header(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()]).pixel_size(PixelSize::HalfHeight)
    }

    pub fn pixel_size(mut self, size: PixelSize) -> Self {
        self.pixel_size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Rows the text occupies at the current pixel size.
    pub fn height(&self) -> u16 {
        let rows_per_line = match self.pixel_size {
            PixelSize::Full | PixelSize::HalfWidth => 8,
            PixelSize::HalfHeight | PixelSize::Quadrant => 4,
            _ => 2,
        };
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX).saturating_mul(rows_per_line)
    }

    /// Columns the widest line occupies at the current pixel size.
    pub fn width(&self) -> u16 {
        let cols_per_char = match self.pixel_size {
            PixelSize::Full | PixelSize::HalfHeight => 8,
            _ => 4,
        };
        let widest = self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        u16::try_from(widest).unwrap_or(u16::MAX).saturating_mul(cols_per_char)
    }
}

impl Widget for BigTextWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self.lines.into_iter().map(Line::from).collect();

        let big_text = BigText::builder()
            .pixel_size(self.pixel_size)
            .style(Style::default().fg(self.fg))
            .alignment(self.alignment)
            .lines(lines)
            .build();

        big_text.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_half_height_and_centered() {
        let header = BigTextWidget::header("OMARCHY");
        assert_eq!(header.pixel_size, PixelSize::HalfHeight);
        assert_eq!(header.alignment, Alignment::Center);
        assert_eq!(header.height(), 4);
        assert_eq!(header.width(), 56);
    }

    #[test]
    fn builder_overrides() {
        let widget = BigTextWidget::new(vec!["A".into(), "BB".into()])
            .pixel_size(PixelSize::Full)
            .color(Color::Red);
        assert_eq!(widget.fg, Color::Red);
        assert_eq!(widget.height(), 16);
        assert_eq!(widget.width(), 16);
    }
}
