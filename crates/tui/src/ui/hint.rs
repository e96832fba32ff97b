//! Simulator hint overlay.
//!
//! The engine owns the hint and its expiry; this module only draws the
//! visible one, bottom-centered over the workspace area.

use omarchy_config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::ui::theme::ThemeExt;

/// Rows the overlay occupies, borders included.
const HINT_HEIGHT: u16 = 3;

/// Draws `text` in a small box near the bottom of `area`.
///
/// Skipped when `area` cannot fit the box.
pub fn render_hint(f: &mut Frame, area: Rect, text: &str, palette: Palette) {
    let text_width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let width = text_width.saturating_add(4).min(area.width);
    if area.height < HINT_HEIGHT || width < 5 {
        return;
    }

    let hint_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height - HINT_HEIGHT,
        width,
        height: HINT_HEIGHT,
    };

    f.render_widget(Clear, hint_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_focused())
        .style(palette.surface());
    let p = Paragraph::new(Line::styled(text.to_string(), palette.title()))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(p, hint_area);
}
