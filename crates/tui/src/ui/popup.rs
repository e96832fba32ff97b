//! Help popup.
//!
//! Responsibilities:
//! - Render the keybinding help over the current page.
//!
//! Does NOT handle:
//! - Opening or closing the popup (see `app::actions::navigation`).

use omarchy_config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::input::help::help_text;
use crate::ui::theme::ThemeExt;

/// Popup size as a percentage of the frame.
pub const POPUP_WIDTH_PERCENT: u16 = 70;
pub const POPUP_HEIGHT_PERCENT: u16 = 85;

pub fn render_help(f: &mut Frame, palette: Palette) {
    let area = centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::styled(" Help ", palette.title()))
        .title_bottom(Line::styled(" Esc to close ", palette.text_dim()).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_focused())
        .style(palette.surface());
    let p = Paragraph::new(help_text())
        .style(palette.text())
        .alignment(Alignment::Left)
        .block(block);
    f.render_widget(p, area);
}

/// Rectangle of the given percentage size centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Rectangle of an exact size centered in `r`, clipped to `r`.
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(70, 85, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 70);
    }

    #[test]
    fn centered_fixed_clips_to_outer() {
        let outer = Rect::new(10, 5, 20, 4);
        let inner = centered_fixed(30, 3, outer);
        assert_eq!(inner, Rect::new(10, 5, 20, 3));
    }
}
