//! Keybind card widget.

use omarchy_config::Palette;
use omarchy_engine::Keybind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::ui::keycap;
use crate::ui::theme::ThemeExt;

/// Rows one card occupies, borders included.
pub const CARD_HEIGHT: u16 = 4;

/// One keybind rendered as a bordered card: chord on the first row,
/// long description below.
pub struct KeybindCard<'a> {
    keybind: &'a Keybind,
    palette: Palette,
}

impl<'a> KeybindCard<'a> {
    pub fn new(keybind: &'a Keybind, palette: Palette) -> Self {
        Self { keybind, palette }
    }
}

impl Widget for KeybindCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(p.border())
            .style(p.surface())
            .title_top(Line::from(Span::styled(
                format!(" {} ", self.keybind.description),
                p.title(),
            )))
            .title_top(
                Line::from(Span::styled(
                    format!(" {} ", self.keybind.category.label()),
                    p.text_dim(),
                ))
                .right_aligned(),
            );

        let chord = Line::from(keycap::chord(self.keybind.keys, p.keycap(), p.text_dim()));
        let detail = Line::from(Span::styled(
            self.keybind.long_description.unwrap_or_default(),
            p.text_dim(),
        ));

        Paragraph::new(vec![chord, detail])
            .block(block)
            .render(area, buf);
    }
}
